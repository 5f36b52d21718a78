use serde::Deserialize;

#[derive(Deserialize)]
pub struct ListResortsQuery {
    /// Substring matched against resort name or location.
    pub q: Option<String>,
    /// One of "rating", "name", "price". Defaults to rating.
    pub sort: Option<String>,
}
