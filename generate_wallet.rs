use clap::Parser;
use signature_studio::utils::crypto::{
    generate_hash, generate_key_pair_with, sign_document, verify_signature, RandomSource,
    SeededRandom, ThreadRandom,
};
use signature_studio::utils::display::{mask_private_key, truncate_key};

/// Print simulated wallets and, optionally, sign and verify a document with them.
#[derive(Parser, Debug)]
#[command(name = "generate_wallet")]
struct Args {
    /// Number of wallets to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for reproducible wallets
    #[arg(long)]
    seed: Option<u64>,

    /// Sign this text with each generated wallet
    #[arg(long)]
    sign: Option<String>,

    /// Print the full private key instead of a mask
    #[arg(long)]
    reveal: bool,
}

fn main() {
    let args = Args::parse();

    let mut random: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    for index in 0..args.count {
        let wallet = generate_key_pair_with(random.as_mut());

        println!("Wallet #{}", index + 1);
        println!("  Address:     {}", wallet.address);
        println!("  Public key:  {}", wallet.public_key);
        if args.reveal {
            println!("  Private key: {}", wallet.private_key);
        } else {
            println!("  Private key: {}", mask_private_key());
        }

        if let Some(document) = &args.sign {
            let hash = generate_hash(document);
            let signature = sign_document(&hash, &wallet.private_key);
            let valid = verify_signature(document, &wallet.public_key, &signature, &wallet.private_key);

            println!("  Document hash: {}", hash);
            println!("  Signature:     {}", signature);
            println!("  Verified:      {}", if valid { "valid" } else { "invalid" });
            println!("  Short form:    {}", truncate_key(&signature, 12, 8));
        }
        println!();
    }
}
