pub mod job_record;
pub mod search_query;
