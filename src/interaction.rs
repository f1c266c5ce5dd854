use crate::{
    data::{InteractionData, RequestData, ResponseData, Status},
    error::Error,
};
use serde_json::Value;
use std::collections::HashMap;

const RECOGNIZED_METHODS: [&str; 7] =
    ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

/// Builder that accumulates the description of a single request/response
/// interaction and materializes it as a compacted [`InteractionData`]
/// document.
///
/// Each configuration step validates its inputs before touching any state,
/// so a failed call leaves the builder exactly as it was. Successful calls
/// return the builder for chaining:
///
/// ```
/// use pact_interaction::InteractionBuilder;
///
/// # fn main() -> Result<(), pact_interaction::Error> {
/// let mut interaction = InteractionBuilder::new(Some("a user exists"));
/// interaction
///     .upon_receiving("a request for the user")?
///     .with_request("GET", "/users/1", None, None, None)?
///     .will_respond_with(200, None, None)?;
///
/// let document = interaction.document();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InteractionBuilder {
    state: Option<String>,
    description: Option<String>,
    request: Option<RequestData>,
    response: Option<ResponseData>,
}

impl InteractionBuilder {
    /// Create a builder for a new interaction.
    ///
    /// # Arguments
    /// `provider_state` - the state the provider must be in for this
    ///     interaction to apply. `None` and the empty string both mean "no
    ///     provider state"; the document will carry no `state` field.
    pub fn new(provider_state: Option<&str>) -> Self {
        Self {
            state: provider_state
                .filter(|state| !is_blank(state))
                .map(String::from),
            ..Self::default()
        }
    }

    /// Set the description of the request the consumer expects to send.
    pub fn upon_receiving(&mut self, description: &str) -> Result<&mut Self, Error> {
        if is_blank(description) {
            return Err(Error::MissingDescription);
        }

        self.description = Some(description.into());
        Ok(self)
    }

    /// Describe the request this interaction expects.
    ///
    /// # Arguments
    /// `method` - a recognized HTTP method, matched case-insensitively.
    /// `path` - the request path.
    /// `query` - the raw query string, if any.
    /// `headers` - request headers, if any.
    /// `body` - an arbitrary JSON body, if any.
    ///
    /// Only the arguments actually supplied end up in the document; `None`
    /// leaves the corresponding field out entirely.
    pub fn with_request(
        &mut self,
        method: &str,
        path: &str,
        query: Option<&str>,
        headers: Option<HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<&mut Self, Error> {
        if is_blank(method) {
            return Err(Error::MissingHttpMethod);
        }
        if !is_recognized_method(method) {
            return Err(Error::InvalidHttpMethod);
        }
        if is_blank(path) {
            return Err(Error::MissingPath);
        }

        self.request = Some(RequestData {
            method: method.into(),
            path: path.into(),
            query: query.map(String::from),
            headers,
            body,
        });
        Ok(self)
    }

    /// Describe the response the provider is expected to return.
    ///
    /// # Arguments
    /// `status` - a numeric status code, or a textual one; a blank textual
    ///     status is rejected.
    /// `headers` - response headers, if any.
    /// `body` - an arbitrary JSON body, if any.
    pub fn will_respond_with<S: Into<Status>>(
        &mut self,
        status: S,
        headers: Option<HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<&mut Self, Error> {
        let status = status.into();
        if let Status::Text(text) = &status {
            if is_blank(text) {
                return Err(Error::MissingStatusCode);
            }
        }

        self.response = Some(ResponseData {
            status,
            headers,
            body,
        });
        Ok(self)
    }

    /// Materialize the compacted document from the accumulated state.
    ///
    /// This is a pure read: it may be called any number of times and always
    /// reflects the builder's current state. Before any configuration step
    /// it yields an empty document.
    pub fn document(&self) -> InteractionData {
        InteractionData {
            state: self.state.clone(),
            description: self.description.clone(),
            request: self.request.clone(),
            response: self.response.clone(),
        }
    }
}

// Blankness is the single absence criterion shared by every validator:
// only the empty string counts, whitespace is kept verbatim.
fn is_blank(value: &str) -> bool {
    value.is_empty()
}

fn is_recognized_method(method: &str) -> bool {
    RECOGNIZED_METHODS
        .iter()
        .any(|recognized| recognized.eq_ignore_ascii_case(method))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_state_is_kept_verbatim() {
        let interaction = InteractionBuilder::new(Some("provider state"));
        assert_eq!(interaction.document().state.as_deref(), Some("provider state"));
    }

    #[test]
    fn blank_provider_state_is_absent() {
        assert_eq!(InteractionBuilder::new(None).document().state, None);
        assert_eq!(InteractionBuilder::new(Some("")).document().state, None);
    }

    #[test]
    fn upon_receiving_rejects_blank_description() {
        let mut interaction = InteractionBuilder::new(None);
        assert_eq!(
            interaction.upon_receiving("").unwrap_err(),
            Error::MissingDescription
        );
        // a failed call must not have touched the state
        assert_eq!(interaction.document(), InteractionData::default());
    }

    #[test]
    fn with_request_validates_method_presence_first() {
        let mut interaction = InteractionBuilder::new(None);
        assert_eq!(
            interaction.with_request("", "", None, None, None).unwrap_err(),
            Error::MissingHttpMethod
        );
    }

    #[test]
    fn with_request_rejects_unrecognized_method() {
        let mut interaction = InteractionBuilder::new(None);
        assert_eq!(
            interaction
                .with_request("MET", "/search", None, None, None)
                .unwrap_err(),
            Error::InvalidHttpMethod
        );
        assert_eq!(interaction.document(), InteractionData::default());
    }

    #[test]
    fn with_request_validates_path_after_method() {
        let mut interaction = InteractionBuilder::new(None);
        assert_eq!(
            interaction.with_request("GET", "", None, None, None).unwrap_err(),
            Error::MissingPath
        );
    }

    #[test]
    fn method_recognition_is_case_insensitive() {
        let mut interaction = InteractionBuilder::new(None);
        interaction
            .with_request("get", "/search", None, None, None)
            .unwrap();
        assert_eq!(interaction.document().request.unwrap().method, "get");
    }

    #[test]
    fn all_recognized_methods_are_accepted() {
        for method in &RECOGNIZED_METHODS {
            let mut interaction = InteractionBuilder::new(None);
            assert!(interaction.with_request(method, "/", None, None, None).is_ok());
        }
    }

    #[test]
    fn will_respond_with_rejects_blank_status() {
        let mut interaction = InteractionBuilder::new(None);
        assert_eq!(
            interaction.will_respond_with("", None, None).unwrap_err(),
            Error::MissingStatusCode
        );
        assert_eq!(interaction.document(), InteractionData::default());
    }

    #[test]
    fn will_respond_with_accepts_numeric_zero() {
        let mut interaction = InteractionBuilder::new(None);
        interaction.will_respond_with(0, None, None).unwrap();
        assert_eq!(
            interaction.document().response.unwrap().status,
            Status::Code(0)
        );
    }

    #[test]
    fn repeated_calls_overwrite_the_group() {
        let mut interaction = InteractionBuilder::new(None);
        interaction.upon_receiving("first").unwrap();
        interaction.upon_receiving("second").unwrap();
        assert_eq!(interaction.document().description.as_deref(), Some("second"));
    }
}
