use crate::{
    error::Error,
    parser::{ArithOp, Command, Segment},
};

/// Infinite loop closing every translated program.
pub const FOOTER: &str = "\
@LOOP
(LOOP)
0;JMP
";

/// First RAM word of the temp segment (`R5`).
const TEMP_BASE: u16 = 5;

// D holds the second operand, M the first.
const BINOP: &str = "\
@SP
AM=M-1
D=M
@SP
A=M-1
";

const UNOP: &str = "\
@SP
A=M-1
";

// Pushes D.
const PUSH_TAIL: &str = "\
@SP
A=M
M=D
@SP
M=M+1
";

/// Emits the assembly of one command.
/// `uid` is the number of comparison labels handed out so far; the updated count is returned.
pub fn translate(cmd: Command, prog: &str, uid: u32) -> Result<(String, u32), Error> {
    match cmd {
        Command::Arith(op) => Ok(arith(op, uid)),
        Command::Push(segment, index) => Ok((push(segment, index, prog), uid)),
        Command::Pop(segment, index) => Ok((pop(segment, index, prog)?, uid)),
    }
}

fn arith(op: ArithOp, uid: u32) -> (String, u32) {
    let cmp = match op {
        ArithOp::Add => return (format!("{}M=D+M\n", BINOP), uid),
        ArithOp::Sub => return (format!("{}M=M-D\n", BINOP), uid),
        ArithOp::And => return (format!("{}M=D&M\n", BINOP), uid),
        ArithOp::Or => return (format!("{}M=D|M\n", BINOP), uid),
        ArithOp::Neg => return (format!("{}M=-M\n", UNOP), uid),
        ArithOp::Not => return (format!("{}M=!M\n", UNOP), uid),
        ArithOp::Eq => "JEQ",
        ArithOp::Gt => "JGT",
        ArithOp::Lt => "JLT",
    };
    let uid = uid + 1;
    let asm = format!(
        "{0}D=M-D\nM=-1\n@CMP{1}\nD;{2}\n@SP\nA=M-1\nM=0\n(CMP{1})\n",
        BINOP, uid, cmp
    );
    (asm, uid)
}

enum Addr {
    Constant,
    /// Fixed RAM word, named by a symbol or a number.
    Direct(String),
    /// `base[index]` through a base pointer register.
    Indirect(&'static str),
}

fn locate(segment: Segment, index: u16, prog: &str) -> Addr {
    match segment {
        Segment::Constant => Addr::Constant,
        Segment::Local => Addr::Indirect("LCL"),
        Segment::Argument => Addr::Indirect("ARG"),
        Segment::This => Addr::Indirect("THIS"),
        Segment::That => Addr::Indirect("THAT"),
        Segment::Pointer if index == 0 => Addr::Direct("THIS".to_string()),
        Segment::Pointer => Addr::Direct("THAT".to_string()),
        Segment::Temp => Addr::Direct((TEMP_BASE + index).to_string()),
        Segment::Static => Addr::Direct(format!("{}.{}", prog, index)),
    }
}

fn push(segment: Segment, index: u16, prog: &str) -> String {
    match locate(segment, index, prog) {
        Addr::Constant => format!("@{}\nD=A\n{}", index, PUSH_TAIL),
        Addr::Direct(sym) => format!("@{}\nD=M\n{}", sym, PUSH_TAIL),
        Addr::Indirect(base) => format!(
            "@{}\nD=A\n@{}\nA=D+M\nD=M\n{}",
            index, base, PUSH_TAIL
        ),
    }
}

// The target address goes through R13 while the stack is popped.
fn pop(segment: Segment, index: u16, prog: &str) -> Result<String, Error> {
    match locate(segment, index, prog) {
        Addr::Constant => Err(Error::PopConstant),
        Addr::Direct(sym) => Ok(format!("@SP\nAM=M-1\nD=M\n@{}\nM=D\n", sym)),
        Addr::Indirect(base) => Ok(format!(
            "@{}\nD=A\n@{}\nD=D+M\n@R13\nM=D\n@SP\nAM=M-1\nD=M\n@R13\nA=M\nM=D\n",
            index, base
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(asm: &str) -> Vec<&str> {
        asm.lines().collect()
    }

    #[test]
    fn test_push_constant() {
        let (asm, uid) = translate(Command::Push(Segment::Constant, 7), "Foo", 0).unwrap();
        assert_eq!(uid, 0);
        assert_eq!(
            lines(&asm),
            vec!["@7", "D=A", "@SP", "A=M", "M=D", "@SP", "M=M+1"]
        );
    }

    #[test]
    fn test_push_segment() {
        let (asm, _) = translate(Command::Push(Segment::Argument, 2), "Foo", 0).unwrap();
        assert_eq!(&lines(&asm)[..5], ["@2", "D=A", "@ARG", "A=D+M", "D=M"]);
    }

    #[test]
    fn test_direct_segments() {
        let (asm, _) = translate(Command::Push(Segment::Temp, 3), "Foo", 0).unwrap();
        assert_eq!(&lines(&asm)[..2], ["@8", "D=M"]);
        let (asm, _) = translate(Command::Pop(Segment::Pointer, 1), "Foo", 0).unwrap();
        assert_eq!(lines(&asm), vec!["@SP", "AM=M-1", "D=M", "@THAT", "M=D"]);
        let (asm, _) = translate(Command::Pop(Segment::Static, 4), "Foo", 0).unwrap();
        assert_eq!(lines(&asm)[3], "@Foo.4");
    }

    #[test]
    fn test_pop_segment() {
        let (asm, _) = translate(Command::Pop(Segment::Local, 1), "Foo", 0).unwrap();
        assert_eq!(
            lines(&asm),
            vec![
                "@1", "D=A", "@LCL", "D=D+M", "@R13", "M=D", "@SP", "AM=M-1", "D=M", "@R13",
                "A=M", "M=D"
            ]
        );
    }

    #[test]
    fn test_pop_constant() {
        let err = translate(Command::Pop(Segment::Constant, 1), "Foo", 0).unwrap_err();
        assert!(matches!(err, Error::PopConstant));
    }

    #[test]
    fn test_compare_labels_are_threaded() {
        let (first, uid) = translate(Command::Arith(ArithOp::Eq), "Foo", 0).unwrap();
        let (add, uid) = translate(Command::Arith(ArithOp::Add), "Foo", uid).unwrap();
        let (second, uid) = translate(Command::Arith(ArithOp::Lt), "Foo", uid).unwrap();
        assert_eq!(uid, 2);
        assert!(first.contains("@CMP1\nD;JEQ\n"));
        assert!(first.ends_with("(CMP1)\n"));
        assert!(!add.contains("CMP"));
        assert!(second.contains("@CMP2\nD;JLT\n"));
    }

    #[test]
    fn test_same_uid_same_output() {
        let a = translate(Command::Arith(ArithOp::Gt), "Foo", 5).unwrap();
        let b = translate(Command::Arith(ArithOp::Gt), "Foo", 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.1, 6);
    }
}
