pub mod u001_billing;
