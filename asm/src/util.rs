use crate::{assemble::Assembly, ident::Ident};
use color_print::cformat;
use std::collections::HashMap;

/// Listing of a program: one row per source line, then the user symbols.
pub fn dump(path: &str, lines: &[String], asm: &Assembly) -> Vec<String> {
    let code: HashMap<usize, (usize, _)> = asm
        .code
        .iter()
        .enumerate()
        .map(|(pc, (line, inst))| (*line, (pc, inst)))
        .collect();
    let labels: HashMap<usize, (&str, u16)> = asm
        .idents
        .iter()
        .filter_map(|(name, line, kind, val)| match (kind, line) {
            (Ident::Label, Some(line)) => Some((line, (name, val))),
            _ => None,
        })
        .collect();

    let mut rows = vec![format!(
        "{}+------[{}]{}",
        "-".repeat(24),
        path,
        "-".repeat(40usize.saturating_sub(path.len()))
    )];

    for (idx, raw) in lines.iter().enumerate() {
        let line = idx + 1;
        let row = if let Some((pc, inst)) = code.get(&line) {
            format!(
                "[{:04X}] {:016b} | {:>4}:   {}",
                pc,
                inst.to_bin(),
                line,
                inst.cformat()
            )
        } else if let Some((name, val)) = labels.get(&line) {
            let label = cformat!("<g>({})</> <dim>= 0x{:04X}</>", name, val);
            format!("{:24}| {:>4}: {}", "", line, label)
        } else {
            format!("{:24}| {:>4}: {}", "", line, cformat!("<dim>{}</>", raw.trim()))
        };
        rows.push(row.trim_end().to_string());
    }

    rows.push(format!("{}+{}", "-".repeat(24), "-".repeat(48)));
    for (name, line, kind, val) in asm.idents.iter() {
        let kind = match kind {
            Ident::Predefined => continue,
            Ident::Label => cformat!("<g>label</>   "),
            Ident::Variable => cformat!("<c>variable</>"),
        };
        let line = line.map(|l| l.to_string()).unwrap_or_default();
        rows.push(format!("  {} 0x{:04X} {:<24} line {}", kind, val, name, line));
    }
    rows
}

/// Writes to a sibling temporary file first so a partial output is never visible.
/// The temporary file is removed again if either step fails.
pub fn write_atomic(path: &str, contents: &str) -> std::io::Result<()> {
    let tmp = format!("{}.tmp", path);
    let result = std::fs::write(&tmp, contents).and_then(|_| std::fs::rename(&tmp, path));
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hasm-util-{}-{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_atomic() {
        let dir = scratch("ok");
        let path = dir.join("out.hack");
        let path = path.to_str().unwrap();
        write_atomic(path, "0000000000000001\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "0000000000000001\n");
        assert!(!dir.join("out.hack.tmp").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_atomic_cleans_up() {
        // Renaming onto an existing directory fails after the temporary file was written.
        let dir = scratch("fail");
        let target = dir.join("out.hack");
        std::fs::create_dir_all(target.join("occupied")).unwrap();
        let path = target.to_str().unwrap();
        assert!(write_atomic(path, "x").is_err());
        assert!(!dir.join("out.hack.tmp").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_dump_rows() {
        let lines: Vec<String> = ["// sum", "@i", "(LOOP)", "@LOOP", "0;JMP"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let asm = assemble(&lines).unwrap();
        let rows = dump("sum.asm", &lines, &asm);

        // header, 5 source rows, separator, 2 symbols
        assert_eq!(rows.len(), 9);
        assert!(rows[0].contains("[sum.asm]"));
        assert!(rows[2].starts_with("[0000] 0000000000010000"));
        assert!(rows[3].contains("LOOP"));
        assert!(rows[4].starts_with("[0001] 0000000000000001"));
        assert!(rows[7].contains("LOOP"));
        assert!(rows[8].contains("0x0010"));
    }
}
