pub mod application {
    pub mod form {
        pub mod begin_edit;
        pub mod store;
        pub mod submit;
    }
    pub mod product_list {
        pub mod delete;
        pub mod refresh;
        pub mod store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod form {
        pub mod state;
        pub mod use_cases {
            pub mod begin_edit;
            pub mod submit;
        }
    }
    pub mod notification {
        pub mod model;
        pub mod sink;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod value_objects;
    }
    pub mod product_list {
        pub mod state;
        pub mod use_cases {
            pub mod delete;
            pub mod refresh;
        }
    }
}
