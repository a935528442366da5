#[derive(Debug, Clone)]
pub struct CreateUserProfileInput {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: String,
    pub allergies: String,
    pub medications: String,
}
