pub mod folio_env;
