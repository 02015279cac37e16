//! Note Commands

#[derive(Debug, Clone)]
pub struct CreateNote {
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct UpdateNote {
    pub id: u64,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct DeleteNote {
    pub id: u64,
}
