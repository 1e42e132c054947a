use super::*;
use vg_core::repositories::CatalogRepo as _;

fn filter(category: Option<&str>) -> usecases::CatalogFilter<'_> {
    usecases::CatalogFilter {
        category,
        ..Default::default()
    }
}

#[get("/locations?<category>")]
pub fn get_locations(
    catalog: &State<StaticCatalog>,
    category: Option<&str>,
) -> Json<Vec<json::Location>> {
    let locations = usecases::filter_locations(catalog.inner(), &filter(category))
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect();
    Json(locations)
}

#[get("/locations/<id>")]
pub fn get_location(catalog: &State<StaticCatalog>, id: u32) -> Result<json::Location> {
    let location = catalog.get_location(ItemId::from(id))?;
    Ok(Json(location.clone().into()))
}

#[get("/routes?<category>")]
pub fn get_routes(
    catalog: &State<StaticCatalog>,
    category: Option<&str>,
) -> Json<Vec<json::Route>> {
    let routes = usecases::filter_routes(catalog.inner(), &filter(category))
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect();
    Json(routes)
}

#[get("/routes/<id>")]
pub fn get_route(catalog: &State<StaticCatalog>, id: u32) -> Result<json::RouteDetail> {
    let usecases::RouteDetail {
        route,
        path,
        center,
        distance,
    } = usecases::route_detail(catalog.inner(), ItemId::from(id))?;
    Ok(Json(json::RouteDetail {
        route: route.clone().into(),
        path: path.into_iter().map(Into::into).collect(),
        center: center.into(),
        distance_meters: distance.to_meters(),
    }))
}

#[get("/recommendations?<category>&<price>")]
pub fn get_recommendations(
    catalog: &State<StaticCatalog>,
    category: Option<&str>,
    price: Option<&str>,
) -> Result<Vec<json::Recommendation>> {
    let filter = usecases::CatalogFilter {
        category,
        price: usecases::parse_price_filter(price)?,
    };
    let recommendations = usecases::filter_recommendations(catalog.inner(), &filter)
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect();
    Ok(Json(recommendations))
}

#[get("/recommendations/<id>")]
pub fn get_recommendation(
    catalog: &State<StaticCatalog>,
    id: u32,
) -> Result<json::Recommendation> {
    let recommendation = catalog.get_recommendation(ItemId::from(id))?;
    Ok(Json(recommendation.clone().into()))
}

#[get("/categories/<kind>")]
pub fn get_categories(catalog: &State<StaticCatalog>, kind: &str) -> Result<Vec<String>> {
    let kind = parse_item_kind(kind)?;
    let categories = usecases::categories(catalog.inner(), kind)
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    Ok(Json(categories))
}
