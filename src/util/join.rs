//! Natural-language list joining ("A, B and C" / "A, B or C").

fn join_with(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} {} {}", init.join(", "), conjunction, last),
    }
}

/// Join items as a comma separated list with an "and" before the last one.
pub fn join_and<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    join_with(&items, "and")
}

/// Join items as a comma separated list with an "or" before the last one.
pub fn join_or<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    join_with(&items, "or")
}
