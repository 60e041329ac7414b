// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod config;

pub mod shared {
    pub mod http {
        pub mod error;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod employee;
            pub mod ports;
        }
        pub mod adapters {
            pub mod in_memory;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod create_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_employees {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod health {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
