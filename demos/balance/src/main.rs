use ethnode::{eth, types::*};

fn main() {
    let address: Address = std::env::args()
        .nth(1)
        .expect("usage: balance <address>")
        .parse()
        .expect("invalid address");

    let client = ethnode::curl::Client::from_env();
    match client
        .call(eth::GetBalance, (address, BlockSpec::default()))
        .unwrap()
    {
        Ok(balance) => println!("balance of {address}: {balance} wei"),
        Err(error) => eprintln!("node error: {error}"),
    }
}
