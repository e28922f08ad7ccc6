multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ========================================================
    // EVENTS
    // ========================================================

    #[event("initialized")]
    fn initialized_event(
        &self,
        #[indexed] custodian: &ManagedAddress,
        #[indexed] payout_token: &EgldOrEsdtTokenIdentifier,
        max_cap: &BigUint,
    );

    #[event("recipientAdded")]
    fn recipient_added_event(&self, #[indexed] index: u64, payout_address: &ManagedAddress);

    #[event("deposited")]
    fn deposited_event(&self, #[indexed] donor: &ManagedAddress, amount: &BigUint);

    #[event("tallyPublished")]
    fn tally_published_event(&self, #[indexed] timestamp: u64, commitment: &BigUint);

    #[event("resultAdded")]
    fn result_added_event(&self, #[indexed] index: u64, tally_result: &BigUint);

    #[event("resultsCompleted")]
    fn results_completed_event(
        &self,
        #[indexed] total_results: u64,
        total_votes_squares: &BigUint,
    );

    #[event("alphaCalculated")]
    fn alpha_calculated_event(&self, #[indexed] budget: &BigUint, alpha: &BigUint);

    #[event("claimed")]
    fn claimed_event(
        &self,
        #[indexed] index: u64,
        #[indexed] payout_address: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("withdrawn")]
    fn withdrawn_event(&self, #[indexed] custodian: &ManagedAddress, amount: &BigUint);
}
