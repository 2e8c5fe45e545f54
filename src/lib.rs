pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod transaction_service_datasource;
        mod utils;
    }
    pub(crate) mod models {
        pub(crate) mod transaction_service {
            pub(crate) mod error_response_model;
            pub(crate) mod validate_transaction_response_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod iap_validator_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod client_config;
        pub mod validation_result;
    }
    pub mod repositories {
        pub mod iap_validator;
    }
}

pub mod constants;
pub mod errors;
pub mod util;
