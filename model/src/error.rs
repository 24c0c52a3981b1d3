use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("`{attribute}` attribute is missing in the item entry{}", row_suffix(.sk))]
    MissingAttribute {
        attribute: &'static str,
        sk: Option<String>,
    },
}

fn row_suffix(sk: &Option<String>) -> String {
    sk.as_ref()
        .map(|sk| format!(" with sk `{}`", sk))
        .unwrap_or_default()
}
