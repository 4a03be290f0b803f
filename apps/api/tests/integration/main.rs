mod test_auth_flows;
mod test_smoke_flows;
mod test_thread_flows;
