pub mod health {
    pub mod routes;
}
pub mod outcome;
pub mod product {
    pub mod dto;
    pub mod routes;
}
pub mod tags;
