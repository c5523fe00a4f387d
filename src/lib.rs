pub mod shared {
    pub mod infrastructure {
        pub mod store;
    }
}

pub mod modules {
    pub mod tracker {
        pub mod core {
            pub mod deadline;
            pub mod entities;
            pub mod progress;
            pub mod stats;
            pub mod status;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod validation;
            pub mod rollup {
                pub mod handler;
            }
            pub mod people {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod projects {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod activities {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod subtasks {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
