pub mod shared {
    pub mod config;
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod events;
            pub mod evolve;
            pub mod roster;
            pub mod seed;
            pub mod decider {
                pub mod decision;
                pub mod sign_up {
                    pub mod command;
                    pub mod decide;
                }
                pub mod unregister {
                    pub mod command;
                    pub mod decide;
                }
            }
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_activities {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod sign_up_for_activity {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_errors;
                pub mod http_responses;
            }
            pub mod outbound {
                pub mod roster_in_memory;
                pub mod roster_repository;
            }
        }
    }
}

pub mod shell;
