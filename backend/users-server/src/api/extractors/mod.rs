pub mod api_query;
