//! Query-string assembly for CyREST requests.

/// Serialize query pairs, dropping entries whose value is unset.
///
/// CyREST treats an empty `key=` as a real value, so unset optional
/// parameters must not appear in the outgoing request at all.
pub fn build_query_string(params: &[(&str, Option<String>)]) -> String {
    params
        .iter()
        .filter_map(|(k, v)| {
            v.as_ref()
                .map(|v| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::build_query_string;

    #[test]
    fn unset_values_are_omitted() {
        let q = build_query_string(&[
            ("column", Some("name".to_string())),
            ("query", None),
        ]);
        assert_eq!(q, "column=name");
    }

    #[test]
    fn all_unset_yields_empty() {
        assert_eq!(build_query_string(&[("h", None), ("file", None)]), "");
    }

    #[test]
    fn keys_and_values_are_percent_encoded() {
        let q = build_query_string(&[("query", Some("node 1/2".to_string()))]);
        assert_eq!(q, "query=node%201%2F2");
    }

    #[test]
    fn multiple_pairs_join_with_ampersand() {
        let q = build_query_string(&[
            ("column", Some("name".to_string())),
            ("query", Some("brca1".to_string())),
        ]);
        assert_eq!(q, "column=name&query=brca1");
    }
}
