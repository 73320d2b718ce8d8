pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod dashboard {
        pub mod core {
            pub mod commands;
            pub mod decide;
            pub mod filter;
            pub mod merge;
            pub mod records;
            pub mod row_view;
            pub mod status;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod load_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod query;
            }
            pub mod manage_quotes {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod backend_api;
                pub mod backend_api_http;
                pub mod backend_api_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod load_dashboard_tests;
    }
}
