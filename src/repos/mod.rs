pub mod csv_repo;
