pub mod accessibility;
pub mod disruption;
pub mod network;
pub mod topology;

#[cfg(test)]
pub(crate) mod test_networks;
