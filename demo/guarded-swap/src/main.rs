use ethers_core::types::{Address, H256};
use ward_core::{journal_digest, ExpectedConfig, ProofJournal};
use ward_gate::{ActionGate, ActionRequest, GateError, ProofVerifier, VerifierFailure};

/// Stand-in verifier for the demo: accepts a proof blob iff it equals the
/// journal digest. A real deployment plugs in `ward_zk::Risc0Verifier`.
struct DevVerifier;

impl ProofVerifier for DevVerifier {
    fn verify(&self, proof: &[u8], _: H256, journal_digest: H256) -> Result<(), VerifierFailure> {
        if proof == journal_digest.as_bytes() {
            Ok(())
        } else {
            Err(VerifierFailure("seal does not match journal".to_string()))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Guarded Swap Simulator - Attested Balance Gating Demo");

    let expected = ExpectedConfig {
        notary_fingerprint: H256::repeat_byte(0x11),
        queries_hash: H256::repeat_byte(0x22),
        url_prefix: "https://api.etherscan.io/api".to_string(),
        program_id: H256::repeat_byte(0x33),
    };
    let operator = Address::repeat_byte(0x01);
    let mut gate = ActionGate::new(expected, operator, DevVerifier);

    let trader: Address = "0x1234567890123456789012345678901234567890".parse()?;
    println!("🤖 Trader wallet: {trader:?}");

    // 1. Proof material arrives from the notarization + proving pipeline
    let now = 1706720100;
    let journal = ProofJournal {
        notary_fingerprint: H256::repeat_byte(0x11),
        method: "GET".to_string(),
        url: "https://api.etherscan.io/api?module=account&action=balance&address=0xabc"
            .to_string(),
        timestamp: 1706720000,
        queries_hash: H256::repeat_byte(0x22),
        value: "5000000000000000000".to_string(), // 5 ETH attested balance
    };
    let journal_bytes = journal.encode();
    let proof = journal_digest(&journal_bytes).as_bytes().to_vec();

    println!("📄 Journal received: 5 ETH attested via zkTLS notary");

    // 2. Submit the proof: constraints, then verification, then the cache
    let event = gate.submit(trader, &journal_bytes, &proof, now)?;
    println!("✅ Proof accepted. Event #{} commits to value {}", event.sequence, event.value);
    println!("⭐ Reputation score: {}", gate.score_of(trader));

    // 3. Low-risk swap sails through on the cached verification
    match gate.execute(
        ActionRequest {
            principal: trader,
            submission: None,
            risk_score: 35,
        },
        now + 60,
    ) {
        Ok(receipt) => println!("💰 SWAP EXECUTED: risk {} under threshold, outcome {:?}", receipt.risk_score, receipt.outcome),
        Err(e) => println!("❌ Swap rejected: {e}"),
    }

    // 4. A high-risk attempt is blocked regardless of the 5 ETH reputation
    match gate.execute(
        ActionRequest {
            principal: trader,
            submission: None,
            risk_score: 95,
        },
        now + 120,
    ) {
        Ok(_) => println!("⚠️ Unexpected: high-risk swap was allowed"),
        Err(GateError::ActionBlocked { risk_score }) => {
            println!("🛑 SWAP BLOCKED: risk score {risk_score} exceeded the threshold")
        }
        Err(e) => println!("❌ Swap failed: {e}"),
    }

    // 5. Demonstrate a tampered journal (wrong notary key)
    println!("\n🕵️ Simulating a forged attestation (unknown notary)...");
    let mut forged = journal.clone();
    forged.notary_fingerprint = H256::repeat_byte(0xff);
    let forged_bytes = forged.encode();
    let forged_proof = journal_digest(&forged_bytes).as_bytes().to_vec();

    let intruder: Address = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd".parse()?;
    match gate.submit(intruder, &forged_bytes, &forged_proof, now + 180) {
        Ok(_) => println!("⚠️ Unexpected: forged journal accepted"),
        Err(e) => println!("❌ Forged journal rejected: {e}"),
    }
    println!("   Intruder verified: {}", gate.is_verified(intruder, now + 180));

    println!("\n🏁 Demo completed.");
    Ok(())
}
