// Shared by the token stream and the syntax tree.

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Plain(String),
    String(String),
    Single(String),
    Double(String),
    Integer(String),
}

impl Ident {
    pub fn as_str(&self) -> &str {
        use Ident::*;
        match self {
            Plain(s) | String(s) | Single(s) | Double(s) | Integer(s) => s,
        }
    }

    /// Names beginning with FN are reserved for user functions.
    pub fn is_user_function(&self) -> bool {
        self.as_str().starts_with("FN")
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
