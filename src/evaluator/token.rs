use std::fmt;

/// One of the four binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Whether `previous` at the same level must be reduced before `self` is pushed.
    pub fn reduces_after(self, previous: Operator) -> bool {
        match self {
            Operator::Mul | Operator::Div => previous == Operator::Div,
            Operator::Add => matches!(previous, Operator::Mul | Operator::Div),
            Operator::Sub => matches!(previous, Operator::Mul | Operator::Div | Operator::Sub),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        };
        write!(f, "{}", symbol)
    }
}

/// A scanned unit waiting on a sub-evaluator stack
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeral text, parsed only when the token is reduced
    Number(String),
    Operator(Operator),
    Open,
    Close,
}

impl Token {
    /// Numeral token for a value folded back onto a stack
    pub fn from_value(value: f32) -> Self {
        Token::Number(format!("{:.6}", value))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}
