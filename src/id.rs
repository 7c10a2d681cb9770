//! Operator and Keyword Id Registry
//!
//! Every operator, keyword, and token kind used anywhere in the LST is
//! assigned one stable small integer here. Nodes store `Id` values and never
//! interpret them; the semantics of an id belong to whichever collaborator
//! (parser, evaluator, translator) consumes the tree.

use std::collections::HashMap;
use serde::Serialize;

/// Stable identifier for one operator, keyword, or token kind.
///
/// The discriminant values are part of the registry contract: ids may be
/// appended but never renumbered.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Id {
    // Abstract token kinds
    Lit,
    LitEscaped,
    LitTilde,
    SingleQuote,
    RawSingleQuote,
    VSubName,
    Name,
    Number,
    Eof,

    // Statement separators and terminators
    Semi,        // ;
    Amp,         // &
    Newline,
    DSemi,       // ;;
    SemiAnd,     // ;&
    SemiSemiAnd, // ;;&

    // Pipelines and lists
    Pipe,   // |
    Bang,   // !
    AndAnd, // &&
    OrOr,   // ||

    // Redirection operators
    Less,      // <
    Great,     // >
    DGreat,    // >>
    DLess,     // <<
    DLessDash, // <<-
    LessAnd,   // <&
    GreatAnd,  // >&
    LessGreat, // <>
    Clobber,   // >|
    TLess,     // <<<
    AndGreat,  // &>

    // ${...} prefix operators
    VSubBang,  // ${!x} indirection
    VSubPound, // ${#x} length

    // ${...} suffix operators (string-unary tests and strip ops)
    VTestColonHyphen, // :-
    VTestHyphen,      // -
    VTestColonEquals, // :=
    VTestEquals,      // =
    VTestColonQMark,  // :?
    VTestQMark,       // ?
    VTestColonPlus,   // :+
    VTestPlus,        // +
    VOpPound,         // #
    VOpDPound,        // ##
    VOpPercent,       // %
    VOpDPercent,      // %%

    // Whole-array bracket operators
    ArithAt,   // @
    ArithStar, // *

    // Arithmetic operators
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Percent,    // %
    DStar,      // **
    LShift,     // <<
    RShift,     // >>
    ArithLess,  // <
    ArithGreat, // >
    LessEqual,  // <=
    GreatEqual, // >=
    DEqual,     // ==
    NotEqual,   // !=
    BitAnd,     // &
    BitOr,      // |
    BitXor,     // ^
    BitNot,     // ~
    DAmp,       // &&
    DPipe,      // ||
    ArithBang,  // !
    DPlus,      // ++
    DMinus,     // --
    Comma,      // ,

    // Assignment operators
    Equals,      // =
    PlusEqual,   // +=
    MinusEqual,  // -=
    StarEqual,   // *=
    SlashEqual,  // /=
    PercentEqual, // %=
    LShiftEqual, // <<=
    RShiftEqual, // >>=
    AmpEqual,    // &=
    PipeEqual,   // |=
    CaretEqual,  // ^=

    // [[ ]] operators
    EqualTilde, // =~
    OpEq,       // -eq
    OpNe,       // -ne
    OpLt,       // -lt
    OpLe,       // -le
    OpGt,       // -gt
    OpGe,       // -ge
    OpZ,        // -z
    OpN,        // -n
    OpE,        // -e
    OpF,        // -f
    OpD,        // -d
    OpR,        // -r
    OpW,        // -w
    OpX,        // -x
    OpS,        // -s
    OpNt,       // -nt
    OpOt,       // -ot
    OpEf,       // -ef

    // Reserved words (dialect 1)
    KwIf,
    KwThen,
    KwElif,
    KwElse,
    KwFi,
    KwFor,
    KwWhile,
    KwUntil,
    KwDo,
    KwDone,
    KwCase,
    KwEsac,
    KwIn,
    KwFunction,
    KwTime,
    KwBreak,
    KwContinue,
    KwReturn,
    KwExit,

    // Assignment builtin keywords
    AssignNone,
    AssignLocal,
    AssignExport,
    AssignReadonly,
    AssignDeclare,

    // Glob operators
    GlobStar,  // *
    GlobQMark, // ?

    // Extended glob prefixes
    ExtGlobAt,    // @(
    ExtGlobStar,  // *(
    ExtGlobPlus,  // +(
    ExtGlobQMark, // ?(
    ExtGlobBang,  // !(

    // Reserved words (dialect 2)
    KwVar,
    KwConst,
    KwSetVar,
    KwFunc,
}

impl Id {
    /// All registered ids, in discriminant order.
    pub const ALL: &'static [Id] = &[
        Id::Lit, Id::LitEscaped, Id::LitTilde, Id::SingleQuote, Id::RawSingleQuote,
        Id::VSubName, Id::Name, Id::Number, Id::Eof,
        Id::Semi, Id::Amp, Id::Newline, Id::DSemi, Id::SemiAnd, Id::SemiSemiAnd,
        Id::Pipe, Id::Bang, Id::AndAnd, Id::OrOr,
        Id::Less, Id::Great, Id::DGreat, Id::DLess, Id::DLessDash, Id::LessAnd,
        Id::GreatAnd, Id::LessGreat, Id::Clobber, Id::TLess, Id::AndGreat,
        Id::VSubBang, Id::VSubPound,
        Id::VTestColonHyphen, Id::VTestHyphen, Id::VTestColonEquals, Id::VTestEquals,
        Id::VTestColonQMark, Id::VTestQMark, Id::VTestColonPlus, Id::VTestPlus,
        Id::VOpPound, Id::VOpDPound, Id::VOpPercent, Id::VOpDPercent,
        Id::ArithAt, Id::ArithStar,
        Id::Plus, Id::Minus, Id::Star, Id::Slash, Id::Percent, Id::DStar,
        Id::LShift, Id::RShift, Id::ArithLess, Id::ArithGreat, Id::LessEqual,
        Id::GreatEqual, Id::DEqual, Id::NotEqual, Id::BitAnd, Id::BitOr,
        Id::BitXor, Id::BitNot, Id::DAmp, Id::DPipe, Id::ArithBang,
        Id::DPlus, Id::DMinus, Id::Comma,
        Id::Equals, Id::PlusEqual, Id::MinusEqual, Id::StarEqual, Id::SlashEqual,
        Id::PercentEqual, Id::LShiftEqual, Id::RShiftEqual, Id::AmpEqual,
        Id::PipeEqual, Id::CaretEqual,
        Id::EqualTilde, Id::OpEq, Id::OpNe, Id::OpLt, Id::OpLe, Id::OpGt,
        Id::OpGe, Id::OpZ, Id::OpN, Id::OpE, Id::OpF, Id::OpD, Id::OpR,
        Id::OpW, Id::OpX, Id::OpS, Id::OpNt, Id::OpOt, Id::OpEf,
        Id::KwIf, Id::KwThen, Id::KwElif, Id::KwElse, Id::KwFi, Id::KwFor,
        Id::KwWhile, Id::KwUntil, Id::KwDo, Id::KwDone, Id::KwCase, Id::KwEsac,
        Id::KwIn, Id::KwFunction, Id::KwTime, Id::KwBreak, Id::KwContinue,
        Id::KwReturn, Id::KwExit,
        Id::AssignNone, Id::AssignLocal, Id::AssignExport, Id::AssignReadonly,
        Id::AssignDeclare,
        Id::GlobStar, Id::GlobQMark,
        Id::ExtGlobAt, Id::ExtGlobStar, Id::ExtGlobPlus, Id::ExtGlobQMark,
        Id::ExtGlobBang,
        Id::KwVar, Id::KwConst, Id::KwSetVar, Id::KwFunc,
    ];

    /// The stable integer assigned to this id.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Registry name: the source spelling for concrete operators and
    /// keywords, an uppercase tag for abstract token kinds.
    pub fn name(self) -> &'static str {
        match self {
            Id::Lit => "LIT",
            Id::LitEscaped => "LIT_ESCAPED",
            Id::LitTilde => "LIT_TILDE",
            Id::SingleQuote => "SQ",
            Id::RawSingleQuote => "RAW_SQ",
            Id::VSubName => "VSUB_NAME",
            Id::Name => "NAME",
            Id::Number => "NUMBER",
            Id::Eof => "EOF",
            Id::Semi => ";",
            Id::Amp => "&",
            Id::Newline => "NEWLINE",
            Id::DSemi => ";;",
            Id::SemiAnd => ";&",
            Id::SemiSemiAnd => ";;&",
            Id::Pipe => "|",
            Id::Bang => "!",
            Id::AndAnd => "&&",
            Id::OrOr => "||",
            Id::Less => "<",
            Id::Great => ">",
            Id::DGreat => ">>",
            Id::DLess => "<<",
            Id::DLessDash => "<<-",
            Id::LessAnd => "<&",
            Id::GreatAnd => ">&",
            Id::LessGreat => "<>",
            Id::Clobber => ">|",
            Id::TLess => "<<<",
            Id::AndGreat => "&>",
            Id::VSubBang => "VSUB_BANG",
            Id::VSubPound => "VSUB_POUND",
            Id::VTestColonHyphen => ":-",
            Id::VTestHyphen => "-",
            Id::VTestColonEquals => ":=",
            Id::VTestEquals => "=",
            Id::VTestColonQMark => ":?",
            Id::VTestQMark => "?",
            Id::VTestColonPlus => ":+",
            Id::VTestPlus => "+",
            Id::VOpPound => "#",
            Id::VOpDPound => "##",
            Id::VOpPercent => "%",
            Id::VOpDPercent => "%%",
            Id::ArithAt => "@",
            Id::ArithStar => "ARITH_STAR",
            Id::Plus => "PLUS",
            Id::Minus => "MINUS",
            Id::Star => "STAR",
            Id::Slash => "/",
            Id::Percent => "PERCENT",
            Id::DStar => "**",
            Id::LShift => "LSHIFT",
            Id::RShift => "RSHIFT",
            Id::ArithLess => "ARITH_LESS",
            Id::ArithGreat => "ARITH_GREAT",
            Id::LessEqual => "<=",
            Id::GreatEqual => ">=",
            Id::DEqual => "==",
            Id::NotEqual => "!=",
            Id::BitAnd => "BIT_AND",
            Id::BitOr => "BIT_OR",
            Id::BitXor => "^",
            Id::BitNot => "~",
            Id::DAmp => "D_AMP",
            Id::DPipe => "D_PIPE",
            Id::ArithBang => "ARITH_BANG",
            Id::DPlus => "++",
            Id::DMinus => "--",
            Id::Comma => ",",
            Id::Equals => "EQUALS",
            Id::PlusEqual => "+=",
            Id::MinusEqual => "-=",
            Id::StarEqual => "*=",
            Id::SlashEqual => "/=",
            Id::PercentEqual => "%=",
            Id::LShiftEqual => "<<=",
            Id::RShiftEqual => ">>=",
            Id::AmpEqual => "&=",
            Id::PipeEqual => "|=",
            Id::CaretEqual => "^=",
            Id::EqualTilde => "=~",
            Id::OpEq => "-eq",
            Id::OpNe => "-ne",
            Id::OpLt => "-lt",
            Id::OpLe => "-le",
            Id::OpGt => "-gt",
            Id::OpGe => "-ge",
            Id::OpZ => "-z",
            Id::OpN => "-n",
            Id::OpE => "-e",
            Id::OpF => "-f",
            Id::OpD => "-d",
            Id::OpR => "-r",
            Id::OpW => "-w",
            Id::OpX => "-x",
            Id::OpS => "-s",
            Id::OpNt => "-nt",
            Id::OpOt => "-ot",
            Id::OpEf => "-ef",
            Id::KwIf => "if",
            Id::KwThen => "then",
            Id::KwElif => "elif",
            Id::KwElse => "else",
            Id::KwFi => "fi",
            Id::KwFor => "for",
            Id::KwWhile => "while",
            Id::KwUntil => "until",
            Id::KwDo => "do",
            Id::KwDone => "done",
            Id::KwCase => "case",
            Id::KwEsac => "esac",
            Id::KwIn => "in",
            Id::KwFunction => "function",
            Id::KwTime => "time",
            Id::KwBreak => "break",
            Id::KwContinue => "continue",
            Id::KwReturn => "return",
            Id::KwExit => "exit",
            Id::AssignNone => "ASSIGN_NONE",
            Id::AssignLocal => "local",
            Id::AssignExport => "export",
            Id::AssignReadonly => "readonly",
            Id::AssignDeclare => "declare",
            Id::GlobStar => "GLOB_STAR",
            Id::GlobQMark => "GLOB_QMARK",
            Id::ExtGlobAt => "@(",
            Id::ExtGlobStar => "*(",
            Id::ExtGlobPlus => "+(",
            Id::ExtGlobQMark => "?(",
            Id::ExtGlobBang => "!(",
            Id::KwVar => "var",
            Id::KwConst => "const",
            Id::KwSetVar => "setvar",
            Id::KwFunc => "func",
        }
    }

    /// Reverse lookup by registry name.
    pub fn from_name(name: &str) -> Option<Id> {
        NAME_TABLE.get(name).copied()
    }
}

lazy_static::lazy_static! {
    static ref NAME_TABLE: HashMap<&'static str, Id> = {
        let mut m = HashMap::new();
        for &id in Id::ALL {
            // First registration wins if two ids ever share a spelling.
            m.entry(id.name()).or_insert(id);
        }
        m
    };
}
