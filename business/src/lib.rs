pub mod application {
    pub mod product {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod http_outcome;
    pub mod logger;
    pub mod outcome;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
}
