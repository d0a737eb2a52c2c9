//! End-to-end integration tests across the whole marketplace.
//!
//! These tests exercise the full lifecycle: service creates and prices a
//! collection, buyers purchase through the settlement engine, value splits
//! between seller and platform, and tokens release from the holding account.
//! They verify the all-or-nothing settlement contract in realistic
//! scenarios: underpayment, hook rejection, re-entrant hooks, inbound
//! receipt validation, and conservation of both value and token supply.

use openmart_settlement::{CollectionParams, Marketplace, Receiver, ReceiverSet};
use openmart_types::{
    AccountId, CollectionId, MarketEvent, MartError, PaymentNotice, Result, TokenId, TokenReceipt,
};

/// Helper: a marketplace with one seller and a standard collection
/// (token id 1, initial amount 100, unit price 5).
struct MarketHarness {
    market: Marketplace,
    receivers: ReceiverSet,
    owner: AccountId,
    service: AccountId,
    seller: AccountId,
}

impl MarketHarness {
    fn new() -> Self {
        let owner = AccountId::new();
        let service = AccountId::new();
        Self {
            market: Marketplace::new(owner, service),
            receivers: ReceiverSet::new(),
            owner,
            service,
            seller: AccountId::new(),
        }
    }

    fn create_default_collection(&mut self) -> CollectionId {
        self.market
            .create_collection(
                self.service,
                CollectionParams {
                    name: "standard".to_string(),
                    metadata_uri: "ipfs://standard".to_string(),
                    token_ids: vec![1],
                    initial_amounts: vec![100],
                    prices: vec![5],
                    payout: self.seller,
                },
            )
            .expect("collection creation should succeed")
    }

    fn fund_buyer(&mut self, amount: u128) -> AccountId {
        let buyer = AccountId::new();
        self.market.deposit(buyer, amount);
        buyer
    }

    fn buy(
        &mut self,
        buyer: AccountId,
        collection: CollectionId,
        token_id: TokenId,
        amount: u128,
        paid: u128,
    ) -> Result<()> {
        self.market
            .purchase(&mut self.receivers, buyer, collection, token_id, amount, paid)
    }
}

// =============================================================================
// Scenario A: exact purchase — buyer pays 50 for 10 units at price 5
// =============================================================================
#[test]
fn e2e_scenario_a_exact_purchase() {
    let mut h = MarketHarness::new();
    let collection = h.create_default_collection();
    let buyer = h.fund_buyer(50);

    h.buy(buyer, collection, 1, 10, 50).unwrap();

    assert_eq!(h.market.token_balance(collection, buyer, 1), 10);
    assert_eq!(
        h.market
            .token_balance(collection, h.market.holding_account(), 1),
        90
    );
    assert_eq!(h.market.bank_balance(h.seller), 45);
    assert_eq!(h.market.bank_balance(h.owner), 5);
    assert_eq!(h.market.bank_balance(buyer), 0);
    h.market.verify_conservation().unwrap();
}

// =============================================================================
// Scenario B: underpayment — 49 for a 50 cost fails, nothing changes
// =============================================================================
#[test]
fn e2e_scenario_b_insufficient_payment() {
    let mut h = MarketHarness::new();
    let collection = h.create_default_collection();
    let buyer = h.fund_buyer(49);

    let err = h.buy(buyer, collection, 1, 10, 49).unwrap_err();
    assert!(matches!(
        err,
        MartError::InsufficientPayment {
            needed: 50,
            paid: 49
        }
    ));

    assert_eq!(h.market.token_balance(collection, buyer, 1), 0);
    assert_eq!(
        h.market
            .token_balance(collection, h.market.holding_account(), 1),
        100
    );
    assert_eq!(h.market.bank_balance(buyer), 49);
    assert_eq!(h.market.bank_balance(h.seller), 0);
    h.market.verify_conservation().unwrap();
}

// =============================================================================
// Scenario C: purchase against an unregistered collection
// =============================================================================
#[test]
fn e2e_scenario_c_unregistered_collection() {
    let mut h = MarketHarness::new();
    h.create_default_collection();
    let buyer = h.fund_buyer(50);
    let stranger = CollectionId::new();

    let err = h.buy(buyer, stranger, 1, 1, 5).unwrap_err();
    assert!(matches!(err, MartError::UnknownCollection(c) if c == stranger));
    assert_eq!(h.market.bank_balance(buyer), 50);
}

// =============================================================================
// Scenario D: non-service caller cannot create collections
// =============================================================================
#[test]
fn e2e_scenario_d_non_service_creation() {
    let mut h = MarketHarness::new();
    let outsider = AccountId::new();

    let err = h
        .market
        .create_collection(
            outsider,
            CollectionParams {
                name: "rogue".to_string(),
                metadata_uri: String::new(),
                token_ids: vec![1],
                initial_amounts: vec![1],
                prices: vec![1],
                payout: outsider,
            },
        )
        .unwrap_err();
    assert!(matches!(err, MartError::Unauthorized { .. }));
    assert!(h.market.events().is_empty());
}

// =============================================================================
// Fee split exactness at tiny totals: the truncated unit goes to the platform
// =============================================================================
#[test]
fn e2e_fee_split_exact_at_tiny_totals() {
    let mut h = MarketHarness::new();
    let collection = h
        .market
        .create_collection(
            h.service,
            CollectionParams {
                name: "penny".to_string(),
                metadata_uri: String::new(),
                token_ids: vec![1],
                initial_amounts: vec![10],
                prices: vec![1],
                payout: h.seller,
            },
        )
        .unwrap();
    let buyer = h.fund_buyer(1);

    // Total cost 1: seller share truncates to 0, platform takes the unit.
    h.buy(buyer, collection, 1, 1, 1).unwrap();
    assert_eq!(h.market.bank_balance(h.seller), 0);
    assert_eq!(h.market.bank_balance(h.owner), 1);
    h.market.verify_conservation().unwrap();
}

// =============================================================================
// Failure idempotence: a failed attempt leaves no residue for the retry
// =============================================================================
#[test]
fn e2e_failed_attempt_then_retry() {
    let mut h = MarketHarness::new();
    let collection = h.create_default_collection();
    let buyer = h.fund_buyer(50);

    assert!(h.buy(buyer, collection, 1, 10, 49).is_err());
    h.buy(buyer, collection, 1, 10, 50).unwrap();

    assert_eq!(h.market.token_balance(collection, buyer, 1), 10);
    assert_eq!(h.market.bank_balance(h.seller), 45);
    assert_eq!(h.market.bank_balance(h.owner), 5);
    h.market.verify_conservation().unwrap();
}

// =============================================================================
// Reentrancy: a hostile token hook re-enters purchase, then rejects —
// the whole call chain unwinds, no double payment, no double release
// =============================================================================
struct ReentrantBuyer {
    collection: CollectionId,
    reject_after: bool,
}

impl Receiver for ReentrantBuyer {
    fn on_tokens(
        &mut self,
        market: &mut Marketplace,
        receivers: &mut ReceiverSet,
        receipt: &TokenReceipt,
    ) -> Result<()> {
        // Registry state mid-settlement is indistinguishable from rest:
        // the pending purchase has not touched it.
        assert!(market.is_registered(self.collection));
        assert_eq!(market.price(self.collection, receipt.token_id), 5);
        // Internal bookkeeping is already final: the tokens are credited.
        assert!(market.token_balance(self.collection, receipt.to, receipt.token_id) >= receipt.amount);

        // Re-enter the settlement engine with the buyer's remaining funds.
        market.purchase(receivers, receipt.to, self.collection, receipt.token_id, 1, 5)?;

        if self.reject_after {
            Err(MartError::TransferRejected {
                reason: "hostile hook".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[test]
fn e2e_reentrant_hook_cannot_double_spend() {
    let mut h = MarketHarness::new();
    let collection = h.create_default_collection();
    let buyer = h.fund_buyer(55);
    h.receivers.register(
        buyer,
        Box::new(ReentrantBuyer {
            collection,
            reject_after: true,
        }),
    );

    // The nested purchase commits mid-call, then the hook rejects the outer
    // transfer: everything — outer and nested — must unwind.
    let err = h.buy(buyer, collection, 1, 10, 50).unwrap_err();
    assert!(matches!(err, MartError::TransferRejected { .. }));

    assert_eq!(h.market.bank_balance(buyer), 55);
    assert_eq!(h.market.token_balance(collection, buyer, 1), 0);
    assert_eq!(
        h.market
            .token_balance(collection, h.market.holding_account(), 1),
        100
    );
    assert_eq!(h.market.bank_balance(h.seller), 0);
    assert_eq!(h.market.bank_balance(h.owner), 0);
    // No purchase event survived the rollback.
    assert!(
        !h.market
            .events()
            .iter()
            .any(|e| matches!(e, MarketEvent::TokenPurchased { .. }))
    );
    h.market.verify_conservation().unwrap();
}

#[test]
fn e2e_reentrant_hook_benign_composition_commits_both() {
    let mut h = MarketHarness::new();
    let collection = h.create_default_collection();
    let buyer = h.fund_buyer(55);
    h.receivers.register(
        buyer,
        Box::new(ReentrantBuyer {
            collection,
            reject_after: false,
        }),
    );

    h.buy(buyer, collection, 1, 10, 50).unwrap();

    // Outer purchase (10 @ 5) plus nested purchase (1 @ 5) both settled.
    assert_eq!(h.market.token_balance(collection, buyer, 1), 11);
    assert_eq!(h.market.bank_balance(buyer), 0);
    // Splits: 45 + 4 to the seller, 5 + 1 to the platform.
    assert_eq!(h.market.bank_balance(h.seller), 49);
    assert_eq!(h.market.bank_balance(h.owner), 6);
    assert_eq!(
        h.market
            .events()
            .iter()
            .filter(|e| matches!(e, MarketEvent::TokenPurchased { .. }))
            .count(),
        2
    );
    h.market.verify_conservation().unwrap();
}

// =============================================================================
// A seller whose payment hook rejects fails the purchase and unwinds it
// =============================================================================
struct RejectingPayee;

impl Receiver for RejectingPayee {
    fn on_payment(
        &mut self,
        _market: &mut Marketplace,
        _receivers: &mut ReceiverSet,
        _notice: &PaymentNotice,
    ) -> Result<()> {
        Err(MartError::TransferRejected {
            reason: "payee refuses".to_string(),
        })
    }
}

#[test]
fn e2e_payment_hook_rejection_rolls_back() {
    let mut h = MarketHarness::new();
    let collection = h.create_default_collection();
    let buyer = h.fund_buyer(50);
    h.receivers.register(h.seller, Box::new(RejectingPayee));

    let err = h.buy(buyer, collection, 1, 10, 50).unwrap_err();
    assert!(matches!(err, MartError::TransferRejected { .. }));

    assert_eq!(h.market.bank_balance(buyer), 50);
    assert_eq!(h.market.bank_balance(h.seller), 0);
    assert_eq!(h.market.token_balance(collection, buyer, 1), 0);
    h.market.verify_conservation().unwrap();
}

// =============================================================================
// A buyer whose receipt hook rejects the asset unwinds the value transfers
// =============================================================================
struct RejectingBuyer;

impl Receiver for RejectingBuyer {
    fn on_tokens(
        &mut self,
        _market: &mut Marketplace,
        _receivers: &mut ReceiverSet,
        _receipt: &TokenReceipt,
    ) -> Result<()> {
        Err(MartError::TransferRejected {
            reason: "asset refused".to_string(),
        })
    }
}

#[test]
fn e2e_token_hook_rejection_rolls_back_value_transfers() {
    let mut h = MarketHarness::new();
    let collection = h.create_default_collection();
    let buyer = h.fund_buyer(50);
    h.receivers.register(buyer, Box::new(RejectingBuyer));

    let err = h.buy(buyer, collection, 1, 10, 50).unwrap_err();
    assert!(matches!(err, MartError::TransferRejected { .. }));

    // The seller and platform credits were already sent — and unwound.
    assert_eq!(h.market.bank_balance(buyer), 50);
    assert_eq!(h.market.bank_balance(h.seller), 0);
    assert_eq!(h.market.bank_balance(h.owner), 0);
    assert_eq!(
        h.market
            .token_balance(collection, h.market.holding_account(), 1),
        100
    );
    h.market.verify_conservation().unwrap();
}

// =============================================================================
// Inbound receipt validation: unrecognized collections are rejected
// =============================================================================
#[test]
fn e2e_unrecognized_sender_rejected() {
    let mut h = MarketHarness::new();
    h.create_default_collection();
    let stranger = CollectionId::new();
    let holder = AccountId::new();

    let err = h
        .market
        .receive_tokens(holder, stranger, 1, 1)
        .unwrap_err();
    assert!(matches!(err, MartError::UnrecognizedSender(_)));

    let err = h
        .market
        .receive_token_batch(holder, stranger, &[(1, 1)])
        .unwrap_err();
    assert!(matches!(err, MartError::UnrecognizedSender(_)));
}

// =============================================================================
// Service rotation: the old credential is revoked with no grace period
// =============================================================================
#[test]
fn e2e_service_rotation_lifecycle() {
    let mut h = MarketHarness::new();
    h.create_default_collection();

    let new_service = AccountId::new();
    h.market
        .set_service_address(h.owner, new_service)
        .unwrap();

    let err = h
        .market
        .create_collection(
            h.service,
            CollectionParams {
                name: "late".to_string(),
                metadata_uri: String::new(),
                token_ids: vec![1],
                initial_amounts: vec![1],
                prices: vec![1],
                payout: h.seller,
            },
        )
        .unwrap_err();
    assert!(matches!(err, MartError::Unauthorized { .. }));

    let second = h
        .market
        .create_collection(
            new_service,
            CollectionParams {
                name: "second".to_string(),
                metadata_uri: String::new(),
                token_ids: vec![7],
                initial_amounts: vec![3],
                prices: vec![2],
                payout: h.seller,
            },
        )
        .unwrap();
    assert!(h.market.is_registered(second));
}

// =============================================================================
// Conservation: many purchases across buyers never create or destroy value
// =============================================================================
#[test]
fn e2e_conservation_across_many_purchases() {
    let mut h = MarketHarness::new();
    let collection = h.create_default_collection();

    let mut total_deposited = 0u128;
    for i in 1..=8u128 {
        let buyer = h.fund_buyer(5 * i);
        total_deposited += 5 * i;
        h.buy(buyer, collection, 1, i, 5 * i).unwrap();
        h.market.verify_conservation().unwrap();
    }

    // 1 + 2 + ... + 8 = 36 units sold.
    assert_eq!(
        h.market
            .token_balance(collection, h.market.holding_account(), 1),
        64
    );
    // Every deposited unit is either with the seller or the platform.
    assert_eq!(
        h.market.bank_balance(h.seller) + h.market.bank_balance(h.owner),
        total_deposited
    );
}
