use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};
use clap::Parser;
use contactbook::{
    database::{database::Database, request_manager::RequestManager},
    model::person::Person,
};
use std::io;

mod assets;
mod routes;
mod views;

/// 📒 Contact book web server, create, list, view and edit people with a live
/// first-name filter on the listing page
#[derive(Parser, Debug)]
struct Cli {
    /// Port the web server will run on
    #[clap(short, long, default_value = "9000")]
    port: u16,

    /// Address the web server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Logs every HTTP request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,

    /// Seeds the contact book with a few sample people on startup
    #[clap(long)]
    seed: bool,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let request_manager = Database::new().run();

    if args.seed {
        seed_sample_people(&request_manager);
    }

    // Set up Ctrl-C handler
    let set_handler_request_manager_clone = request_manager.clone();

    ctrlc::set_handler(move || {
        let shutdown_response = set_handler_request_manager_clone
            .clone()
            .send_shutdown_request()
            .expect("Should not timeout");

        log::info!("Shutting down server: {}", shutdown_response);

        std::process::exit(0);
    })
    .expect("Error setting Ctrl-C handler");

    log::info!("starting HTTP server on port {}.", args.port);

    log::info!(
        "Contact book: http://{}:{}/people",
        args.address,
        args.port
    );

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(request_manager.clone()))
            .configure(routes::config)
            .wrap(Condition::new(args.log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}

fn seed_sample_people(request_manager: &RequestManager) {
    let sample_people = [
        ("John", "Doe", "(314) 142-9182"),
        ("Johnny", "Baggins", "(314) 533-0196"),
        ("Sarah", "Jones", "(314) 731-5008"),
        ("Jessica", "Jones", "(314) 808-4276"),
    ];

    for (first_name, last_name, phone_number) in sample_people {
        let add_result = request_manager.send_add(Person::new(
            first_name.to_string(),
            last_name.to_string(),
            phone_number.to_string(),
        ));

        match add_result {
            Ok(person) => log::info!("Seeded person: {} {}", person.first_name, person.last_name),
            Err(e) => log::warn!("Failed to seed person {} {}: {}", first_name, last_name, e),
        }
    }
}
