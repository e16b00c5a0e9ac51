//! Endpoint paths
//!
//! Builds the request targets for the three backend calls. Path segments and
//! query values are percent-encoded with `encodeURIComponent` semantics so the
//! wire format matches what browsers have always sent.

/// Collection path
pub const ACTIVITIES_PATH: &str = "/activities";

/// Percent-encode a single path segment or query value.
///
/// `urlencoding` leaves only `A-Z a-z 0-9 - _ . ~` unescaped; the browser's
/// `encodeURIComponent` additionally keeps `! ' ( ) *` literal.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// `GET /activities`
pub fn list_activities() -> String {
    ACTIVITIES_PATH.to_string()
}

/// `POST /activities/{activity}/signup?email={email}`
pub fn signup(activity: &str, email: &str) -> String {
    format!(
        "{}/{}/signup?email={}",
        ACTIVITIES_PATH,
        encode_component(activity),
        encode_component(email)
    )
}

/// `DELETE /activities/{activity}/participants?email={email}`
pub fn unregister(activity: &str, email: &str) -> String {
    format!(
        "{}/{}/participants?email={}",
        ACTIVITIES_PATH,
        encode_component(activity),
        encode_component(email)
    )
}

/// Join a base URL and an endpoint path.
///
/// An empty base yields the bare path, which browsers resolve against the
/// page origin.
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_path_is_percent_encoded() {
        assert_eq!(
            signup("Chess Club", "x@y.com"),
            "/activities/Chess%20Club/signup?email=x%40y.com"
        );
    }

    #[test]
    fn test_unregister_path_is_percent_encoded() {
        assert_eq!(
            unregister("Art & Crafts", "a+b@x.com"),
            "/activities/Art%20%26%20Crafts/participants?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn test_encode_component_matches_browser_reserved_set() {
        assert_eq!(encode_component("it's (fun)!*"), "it's%20(fun)!*");
        assert_eq!(encode_component("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
        assert_eq!(encode_component("Café"), "Caf%C3%A9");
        assert_eq!(encode_component("-_.~"), "-_.~");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "/activities"), "/activities");
        assert_eq!(join("http://localhost:8000/", "/activities"), "http://localhost:8000/activities");
        assert_eq!(list_activities(), "/activities");
    }
}
