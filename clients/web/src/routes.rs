use actix_web::{
    get,
    http::{header, header::ContentType, StatusCode},
    post, web, HttpResponse, Responder, ResponseError,
};
use actix_web_lab::respond::Html;
use contactbook::{
    consts::consts::EntityId,
    database::request_manager::{RequestManager, RequestManagerError},
    model::person::{Person, UpdatePersonData},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{assets::APPLICATION_JS, views};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("No person exists with id: {0}")]
    PersonNotFound(String),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] RequestManagerError),
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::PersonNotFound(_) => StatusCode::NOT_FOUND,
            WebError::MissingField(_) => StatusCode::BAD_REQUEST,
            WebError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let title = match self.status_code() {
            StatusCode::NOT_FOUND => "Person not found",
            StatusCode::BAD_REQUEST => "Invalid person",
            _ => "Something went wrong",
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(views::error_page(title, &self.to_string()))
    }
}

/// Shape of both the creation and the edit form bodies. Field names follow the
/// `person[attribute]` convention the rendered forms use.
#[derive(Deserialize)]
pub struct PersonFormData {
    #[serde(rename = "person[first_name]")]
    first_name: String,
    #[serde(rename = "person[last_name]")]
    last_name: String,
    #[serde(rename = "person[phone_number]")]
    phone_number: String,
}

impl PersonFormData {
    /// Every Person field is required, a whitespace-only submission counts as blank
    fn validated(self) -> Result<(String, String, String), WebError> {
        if self.first_name.trim().is_empty() {
            return Err(WebError::MissingField("First name"));
        }

        if self.last_name.trim().is_empty() {
            return Err(WebError::MissingField("Last name"));
        }

        if self.phone_number.trim().is_empty() {
            return Err(WebError::MissingField("Phone number"));
        }

        Ok((self.first_name, self.last_name, self.phone_number))
    }
}

fn redirect_to_person(person: &Person) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/people/{}", person.id)))
        .finish()
}

#[get("/")]
async fn root() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/people"))
        .finish()
}

/// The filter script, referenced by every page's layout
#[get("/javascripts/application.js")]
async fn application_js() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript")
        .body(APPLICATION_JS)
}

#[get("/people")]
async fn people_index(
    request_manager: web::Data<RequestManager>,
) -> Result<Html, WebError> {
    let people = request_manager.send_list()?;

    Ok(Html(views::people_index(&people)))
}

#[get("/people/new")]
async fn person_new() -> impl Responder {
    Html(views::person_new())
}

#[post("/people")]
async fn person_create(
    request_manager: web::Data<RequestManager>,
    form: web::Form<PersonFormData>,
) -> Result<HttpResponse, WebError> {
    let (first_name, last_name, phone_number) = form.into_inner().validated()?;

    let person = request_manager.send_add(Person::new(first_name, last_name, phone_number))?;

    Ok(redirect_to_person(&person))
}

#[get("/people/{id}")]
async fn person_show(
    request_manager: web::Data<RequestManager>,
    path: web::Path<String>,
) -> Result<Html, WebError> {
    let id = path.into_inner();

    let person = request_manager
        .send_get(EntityId(id.clone()))?
        .ok_or(WebError::PersonNotFound(id))?;

    Ok(Html(views::person_show(&person)))
}

#[get("/people/{id}/edit")]
async fn person_edit(
    request_manager: web::Data<RequestManager>,
    path: web::Path<String>,
) -> Result<Html, WebError> {
    let id = path.into_inner();

    let person = request_manager
        .send_get(EntityId(id.clone()))?
        .ok_or(WebError::PersonNotFound(id))?;

    Ok(Html(views::person_edit(&person)))
}

#[post("/people/{id}")]
async fn person_update(
    request_manager: web::Data<RequestManager>,
    path: web::Path<String>,
    form: web::Form<PersonFormData>,
) -> Result<HttpResponse, WebError> {
    let id = path.into_inner();
    let (first_name, last_name, phone_number) = form.into_inner().validated()?;

    // Resolve the id first so an unknown person is a 404 rather than a
    // statement failure from the store
    request_manager
        .send_get(EntityId(id.clone()))?
        .ok_or_else(|| WebError::PersonNotFound(id.clone()))?;

    let person = request_manager.send_update(
        EntityId(id),
        UpdatePersonData::set_all(first_name, last_name, phone_number),
    )?;

    Ok(redirect_to_person(&person))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    // `/people/new` must be registered ahead of `/people/{id}` so "new" is not
    // captured as an id
    cfg.service(root)
        .service(application_js)
        .service(people_index)
        .service(person_new)
        .service(person_create)
        .service(person_show)
        .service(person_edit)
        .service(person_update);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web::Data, App};
    use contactbook::{
        database::database::Database,
        listing::filter::{apply_filter, ListingRow},
    };

    fn person_form_body(
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> [(&'static str, String); 3] {
        [
            ("person[first_name]", first_name.to_string()),
            ("person[last_name]", last_name.to_string()),
            ("person[phone_number]", phone_number.to_string()),
        ]
    }

    /// Extracts the first `<td>` of every data row, the text the filter reads
    fn first_name_cells(html: &str) -> Vec<String> {
        html.split("<tr>")
            .filter(|segment| segment.contains("<td>"))
            .map(|segment| {
                segment
                    .split("<td>")
                    .nth(1)
                    .and_then(|cell| cell.split("</td>").next())
                    .expect("data row should have a first cell")
                    .to_string()
            })
            .collect()
    }

    macro_rules! test_app {
        ($request_manager:expr) => {
            test::init_service(
                App::new()
                    .app_data(Data::new($request_manager.clone()))
                    .configure(config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn root_redirects_to_the_listing() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/people"
        );
    }

    #[actix_web::test]
    async fn creating_a_person_redirects_to_their_page() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        // When we submit the creation form
        let request = test::TestRequest::post()
            .uri("/people")
            .set_form(person_form_body("John", "Doe", "(314) 142-9182"))
            .to_request();

        let response = test::call_service(&app, request).await;

        // Then we are redirected to the new person's page
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get(header::LOCATION)
            .expect("redirect should carry a location")
            .to_str()
            .unwrap();

        assert!(location.starts_with("/people/"));
        assert!(location.len() > "/people/".len());
    }

    #[actix_web::test]
    async fn created_person_appears_in_the_listing() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let create = test::TestRequest::post()
            .uri("/people")
            .set_form(person_form_body("John", "Doe", "(314) 142-9182"))
            .to_request();
        test::call_service(&app, create).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/people").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = test::read_body(response).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("<td>John</td>"));
        assert!(html.contains("<td>Doe</td>"));
        assert!(html.contains("<td>(314) 142-9182</td>"));
    }

    #[actix_web::test]
    async fn creating_with_a_blank_first_name_is_rejected() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let request = test::TestRequest::post()
            .uri("/people")
            .set_form(person_form_body("   ", "Doe", "(314) 142-9182"))
            .to_request();

        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // And nothing was stored
        assert_eq!(request_manager.send_list().unwrap(), vec![]);
    }

    #[actix_web::test]
    async fn showing_an_unknown_person_is_not_found() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/people/missing").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn show_page_renders_the_person() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let person = request_manager
            .send_add(Person::new(
                "John".to_string(),
                "Doe".to_string(),
                "(314) 142-9182".to_string(),
            ))
            .unwrap();

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/people/{}", person.id))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = test::read_body(response).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("John"));
        assert!(html.contains("Doe"));
        assert!(html.contains("(314) 142-9182"));
    }

    #[actix_web::test]
    async fn edit_form_prefills_the_current_values() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let person = request_manager
            .send_add(Person::new(
                "John".to_string(),
                "Doe".to_string(),
                "(314) 142-9182".to_string(),
            ))
            .unwrap();

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/people/{}/edit", person.id))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = test::read_body(response).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("value=\"John\""));
        assert!(html.contains(&format!("action=\"/people/{}\"", person.id)));
    }

    #[actix_web::test]
    async fn updating_a_person_changes_what_the_show_page_renders() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let person = request_manager
            .send_add(Person::new(
                "John".to_string(),
                "Doe".to_string(),
                "(314) 142-9182".to_string(),
            ))
            .unwrap();

        let update = test::TestRequest::post()
            .uri(&format!("/people/{}", person.id))
            .set_form(person_form_body("Johnny", "Baggins", "(314) 533-0196"))
            .to_request();

        let response = test::call_service(&app, update).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let show = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/people/{}", person.id))
                .to_request(),
        )
        .await;

        let body = test::read_body(show).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("Johnny"));
        assert!(html.contains("Baggins"));
        assert!(!html.contains("(314) 142-9182"));
    }

    #[actix_web::test]
    async fn updating_an_unknown_person_is_not_found() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let request = test::TestRequest::post()
            .uri("/people/missing")
            .set_form(person_form_body("John", "Doe", "(314) 142-9182"))
            .to_request();

        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn the_filter_script_is_served_with_its_wiring() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/javascripts/application.js")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/javascript"
        );

        let body = test::read_body(response).await;
        let script = std::str::from_utf8(&body).unwrap();

        // Literal-substring matching against the first cell, header skipped
        assert!(script.contains("person_first_name"));
        assert!(script.contains("includes(query)"));
        assert!(script.contains("var i = 1"));
        assert!(script.contains("cells[0]"));
    }

    /// The acceptance scenario: four people listed, typing "Johnny" leaves
    /// only Johnny Baggins visible. The rendered first-name cells are fed
    /// through the canonical predicate the browser script mirrors.
    #[actix_web::test]
    async fn filtering_the_rendered_listing_for_johnny() {
        let request_manager = Database::new().run();
        let app = test_app!(request_manager);

        for (first_name, last_name) in [
            ("John", "Doe"),
            ("Johnny", "Baggins"),
            ("Sarah", "Jones"),
            ("Jessica", "Jones"),
        ] {
            request_manager
                .send_add(Person::new(
                    first_name.to_string(),
                    last_name.to_string(),
                    "(314) 142-9182".to_string(),
                ))
                .unwrap();
        }

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/people").to_request()).await;
        let body = test::read_body(response).await;
        let html = std::str::from_utf8(&body).unwrap();

        let cells = first_name_cells(html);
        assert_eq!(cells, vec!["John", "Johnny", "Sarah", "Jessica"]);

        let mut rows: Vec<ListingRow> = cells.into_iter().map(ListingRow::new).collect();
        apply_filter(&mut rows, "Johnny");

        let visible: Vec<&str> = rows
            .iter()
            .filter(|row| row.is_visible())
            .map(|row| row.first_name_cell.as_str())
            .collect();

        assert_eq!(visible, vec!["Johnny"]);
    }
}
