use async_graphql::{Error, ErrorExtensions};

/// Converts a domain error into a GraphQL error with `name` and `code` extensions.
pub trait IntoGraphQLError {
    fn into_graphql_error(self) -> Error;
}

pub(crate) fn graphql_error(name: &str, code: &str) -> Error {
    let name = name.to_string();
    let code = code.to_string();
    Error::new(code.clone()).extend_with(|_, extensions| {
        extensions.set("name", name);
        extensions.set("code", code);
    })
}
