use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AskController, ServeController};

pub struct Router<'a> {
    serve_controller: ServeController<'a>,
    ask_controller: AskController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            serve_controller: ServeController::new(container),
            ask_controller: AskController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Serve {
                host,
                port,
                static_dir,
                templates_dir,
            } => {
                self.serve_controller
                    .serve(host, port, static_dir, templates_dir)
                    .await
            }
            Commands::Ask {
                message,
                option,
                image,
                description,
            } => {
                self.ask_controller
                    .ask(message, option, image, description)
                    .await
            }
        }
    }
}
