use crate::engine::definition::MicroserviceIdentity;

pub const TEST_APP_ID: &str = "pojotest";
pub const TEST_MICROSERVICE: &str = "perfClient";

pub struct IdentityFactory {
    app_id: String,
    name: String,
}

impl IdentityFactory {
    pub fn new() -> Self {
        Self {
            app_id: TEST_APP_ID.to_string(),
            name: TEST_MICROSERVICE.to_string(),
        }
    }

    pub fn with_app(mut self, app_id: &str) -> Self {
        self.app_id = app_id.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn create(self) -> MicroserviceIdentity {
        MicroserviceIdentity::new(&self.app_id, &self.name).expect("valid test identity")
    }
}
