pub mod application {
    pub mod product {
        pub mod catalog;
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod paginate;
        pub mod search;
        pub mod update;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod repository;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod paginate;
            pub mod search;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod pagination;
        pub mod value_objects;
    }
    pub mod user {
        pub mod repository;
    }
}
