/// Filter expression selecting records by id, in the datastore's formula
/// language: `OR(RECORD_ID()='a',RECORD_ID()='b')`.
///
/// A single id yields a bare comparison and no ids yield an empty formula.
pub fn record_id_filter<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let clauses = ids
        .into_iter()
        .map(|id| format!("RECORD_ID()='{}'", id.as_ref().replace('\'', "\\'")))
        .collect::<Vec<_>>();

    match clauses.len() {
        0 => String::new(),
        1 => clauses.into_iter().collect(),
        _ => format!("OR({})", clauses.join(",")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_filter() {
        assert_eq!(
            record_id_filter(["recA", "recB"]),
            "OR(RECORD_ID()='recA',RECORD_ID()='recB')"
        );
        assert_eq!(record_id_filter(["recA"]), "RECORD_ID()='recA'");
        assert_eq!(record_id_filter(Vec::<String>::new()), "");
    }

    #[test]
    fn test_record_id_filter_escapes_quotes() {
        assert_eq!(record_id_filter(["it's"]), "RECORD_ID()='it\\'s'");
    }
}
