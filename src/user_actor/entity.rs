use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate};

impl Entity for User {
    type Id = u64;
    type CreateParams = UserCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create_params(id: u64, params: UserCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            username: params.username,
            password: params.password,
        })
    }

    /// Users are never updated.
    fn on_update(&mut self, _update: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
