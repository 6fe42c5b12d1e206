/// Writer behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Reject `end_array` while a map is open (and vice versa) instead of
    /// closing whatever container is innermost.
    pub check_container_kind: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            check_container_kind: true,
        }
    }
}

impl Options {
    /// Closes the innermost container regardless of the kind named by the
    /// close call.
    pub fn permissive() -> Self {
        Self {
            check_container_kind: false,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod test {
    use super::*;

    #[test]
    fn deserialize_defaults() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());

        let options: Options =
            serde_json::from_str(r#"{"check_container_kind": false}"#).unwrap();
        assert_eq!(options, Options::permissive());
    }
}
