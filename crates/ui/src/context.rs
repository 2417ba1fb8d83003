use std::sync::Arc;

use mathdash_core::model::GameType;
use services::GameLoopService;

/// Composition-root surface the UI needs from the application.
pub trait UiApp: Send + Sync {
    fn default_game_type(&self) -> GameType;

    fn game_loop(&self) -> Arc<GameLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    default_game_type: GameType,
    game_loop: Arc<GameLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_game_type: app.default_game_type(),
            game_loop: app.game_loop(),
        }
    }

    #[must_use]
    pub fn default_game_type(&self) -> GameType {
        self.default_game_type
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

/// Build an `AppContext` from the app composition root (e.g. `crates/app`).
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
