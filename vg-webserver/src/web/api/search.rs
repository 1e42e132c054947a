use super::*;

#[get("/search?<text>")]
pub fn get_search(catalog: &State<StaticCatalog>, text: Option<&str>) -> Json<json::SearchResults> {
    let usecases::SearchResults {
        locations,
        routes,
        recommendations,
    } = usecases::search(catalog.inner(), text.unwrap_or_default());
    Json(json::SearchResults {
        locations: locations.into_iter().cloned().map(Into::into).collect(),
        routes: routes.into_iter().cloned().map(Into::into).collect(),
        recommendations: recommendations.into_iter().cloned().map(Into::into).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn search(client: &Client, text: &str) -> json::SearchResults {
        let response = client.get(format!("/search?text={text}")).dispatch();
        assert_eq!(response.status(), Status::Ok);
        test_json(&response);
        response.into_json().unwrap()
    }

    #[test]
    fn short_queries_yield_no_results() {
        let (client, _) = setup();
        let results = search(&client, "s");
        assert!(results.locations.is_empty());
        assert!(results.routes.is_empty());
        assert!(results.recommendations.is_empty());

        let response = client.get("/search").dispatch();
        assert_eq!(response.status(), Status::Ok);
    }

    #[test]
    fn case_insensitive_search() {
        let (client, _) = setup();
        let lower = search(&client, "san%20marco");
        let upper = search(&client, "SAN%20MARCO");
        assert!(!lower.locations.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn results_are_capped_per_catalog() {
        let (client, _) = setup();
        let results = search(&client, "the");
        assert_eq!(3, results.locations.len());
        assert_eq!(3, results.routes.len());
        assert_eq!(3, results.recommendations.len());
        assert_eq!(1, results.locations[0].id);
    }
}
