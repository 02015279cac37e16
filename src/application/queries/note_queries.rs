//! Note Queries

#[derive(Debug, Clone)]
pub struct GetNote {
    pub id: u64,
}

#[derive(Debug, Clone)]
pub struct ListNotes;
