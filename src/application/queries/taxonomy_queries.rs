//! Taxonomy Queries

#[derive(Debug, Clone)]
pub struct ListCategories;

#[derive(Debug, Clone)]
pub struct ListTags;
