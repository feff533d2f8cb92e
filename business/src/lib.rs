pub mod application {
    pub mod analysis {
        pub mod analyze_image;
        pub mod compare;
    }
}

pub mod domain {
    pub mod logger;
    pub mod analysis {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod analyze_image;
            pub mod compare;
        }
    }
    pub mod prompt {
        pub mod model;
    }
}
