use std::{env, net::SocketAddr, process, sync::Arc};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    app::env::Envy,
    cli::{Cli, Command, GenerateArgs},
    viewer::{
        client::{DownloadOutcome, GenerateClient},
        driver::Viewer,
        state::{Action, Field, Phase, PreloadOutcome},
    },
};

mod app;
mod characters;
mod cli;
mod presets;
mod viewer;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
}

pub fn create_app(envy: Envy) -> Router {
    let state = AppState {
        envy: Arc::new(envy),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // characters
        .route(
            "/api/generate-image",
            post(characters::controller::generate_image),
        )
        // presets
        .route("/api/presets", get(presets::controller::get_presets))
        .fallback(app::controller::fallback)
        .with_state(state)
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

#[tokio::main]
async fn main() {
    // tracing
    app::logging::init();

    match Cli::parse().command {
        None | Some(Command::Serve) => serve().await,
        Some(Command::Generate(args)) => generate(args).await,
    }
}

async fn serve() {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    tracing::info!(
        "forwarding prompts to {} ({})",
        envy.image_provider_url,
        envy.app_env
    );

    let app = create_app(envy);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e, "server stopped");
        process::exit(1);
    }
}

async fn generate(args: GenerateArgs) {
    let client = GenerateClient::new(&args.endpoint);
    let mut viewer = Viewer::new(client, &args.out);

    let mut actions = Vec::new();

    if let Some(name) = &args.preset {
        let Some(preset) = presets::service::find_preset(name) else {
            eprintln!("unknown preset: {}", name);
            process::exit(2);
        };
        actions.push(Action::SelectPreset(*preset));
    }

    let fields = [
        (Field::ShirtColor, &args.shirt),
        (Field::PantsColor, &args.pants),
        (Field::HairColor, &args.hair),
        (Field::AdditionalDetails, &args.details),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            actions.push(Action::EditField(field, value.to_string()));
        }
    }

    actions.push(Action::Submit);

    for action in actions {
        if let Err(e) = viewer.dispatch(action).await {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }

    let state = viewer.state();
    if state.phase == Phase::Errored {
        eprintln!(
            "ERROR: {}",
            state.error.as_deref().unwrap_or("unknown error")
        );
        process::exit(1);
    }

    if let Some(result) = &state.result {
        println!("prompt: {}", result.prompt);
    }
    if let Some(image) = &state.image {
        println!("image: {}", image.url);
        match image.preload {
            PreloadOutcome::Decoded(size) => println!("size: {}x{}", size.width, size.height),
            PreloadOutcome::Failed => println!("size: unknown (preload failed)"),
        }
    }

    if !args.download {
        return;
    }

    match viewer.dispatch(Action::Download).await {
        Ok(Some(DownloadOutcome::Saved(path))) => println!("saved: {}", path.display()),
        Ok(Some(DownloadOutcome::DirectLink(url))) => {
            println!("download directly from: {}", url)
        }
        Ok(None) => println!("nothing to download"),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
