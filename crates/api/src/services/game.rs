//! Game catalogue.

use skillcheck_core::types::DbId;
use skillcheck_core::validation::validate_input;
use skillcheck_db::models::game::{CreateGame, Game, UpdateGame};
use skillcheck_db::store::GameStore;

use super::not_found;
use crate::error::AppResult;

const ENTITY: &str = "Game";

pub struct GameService<'a, S> {
    store: &'a S,
}

impl<'a, S: GameStore> GameService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Game>> {
        Ok(self.store.list_games().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Game> {
        self.store
            .find_game(id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    /// Games currently offered for assignment.
    pub async fn list_active(&self) -> AppResult<Vec<Game>> {
        Ok(self.store.list_games_by_active(true).await?)
    }

    pub async fn list_by_type(&self, game_type: &str) -> AppResult<Vec<Game>> {
        Ok(self.store.list_games_by_type(game_type).await?)
    }

    /// Create a game. `active` defaults to `true` when omitted.
    pub async fn create(&self, input: CreateGame) -> AppResult<Game> {
        validate_input(&input)?;
        let game = self.store.insert_game(&input).await?;
        tracing::info!(game_id = game.id, game_type = %game.game_type, "Game created");
        Ok(game)
    }

    pub async fn update(&self, id: DbId, input: UpdateGame) -> AppResult<Game> {
        validate_input(&input)?;
        let game = self
            .store
            .update_game(id, &input)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;
        tracing::info!(game_id = id, active = game.active, "Game updated");
        Ok(game)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete_game(id).await? {
            return Err(not_found(ENTITY, id));
        }
        tracing::info!(game_id = id, "Game deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use skillcheck_core::error::CoreError;
    use skillcheck_db::store::MemoryStore;

    use super::*;
    use crate::error::AppError;

    fn input(name: &str, game_type: &str, active: Option<bool>) -> CreateGame {
        CreateGame {
            game_name: name.into(),
            game_description: "Match the shapes".into(),
            skill_name: "Pattern recognition".into(),
            game_url: "https://games.example.com/shapes".into(),
            game_image: "https://games.example.com/shapes.png".into(),
            active,
            game_type: game_type.into(),
        }
    }

    #[tokio::test]
    async fn active_defaults_to_true() {
        let store = MemoryStore::new();
        let service = GameService::new(&store);

        let game = service.create(input("Shapes", "PUZZLE", None)).await.unwrap();
        assert!(game.active);
    }

    #[tokio::test]
    async fn active_and_type_filters() {
        let store = MemoryStore::new();
        let service = GameService::new(&store);
        let live = service.create(input("Shapes", "PUZZLE", None)).await.unwrap();
        service
            .create(input("Retired", "PUZZLE", Some(false)))
            .await
            .unwrap();
        service.create(input("Words", "VERBAL", None)).await.unwrap();

        let active = service.list_active().await.unwrap();
        assert_eq!(active.len(), 2);
        assert!(active.contains(&live));

        assert_eq!(service.list_by_type("PUZZLE").await.unwrap().len(), 2);
        assert!(service.list_by_type("puzzle").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let store = MemoryStore::new();
        let service = GameService::new(&store);

        assert_matches!(
            service.create(input("  ", "PUZZLE", None)).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }
}
