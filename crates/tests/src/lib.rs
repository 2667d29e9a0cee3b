#[cfg(test)]
mod common;

#[cfg(test)]
mod api_client_tests;

#[cfg(test)]
mod auth_flow_tests;

#[cfg(test)]
mod equipment_api_tests;

#[cfg(test)]
mod lending_api_tests;

#[cfg(test)]
mod analytics_api_tests;
