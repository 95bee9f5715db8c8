pub mod aggregate;
pub mod consultant;
pub mod goal;
pub mod ledger;
pub mod segment;
