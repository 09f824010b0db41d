//! The pool engine.

use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::domain::{
    AddLiquidityReceipt, Address, Amount, FeeTier, Liquidity, Price, RemoveLiquidityReceipt,
    SwapReceipt, TokenPair,
};
use crate::error::{Result, SwapError};
use crate::math::product;
use crate::traits::Ledger;

use super::journal::{Journal, Movement};
use super::state::Staged;
use super::liquidity::{plan_deposit, plan_withdrawal};
use super::oracle::spot_price;
use super::swap::{get_amount_out_with_fee, quote_exact_in};
use super::{
    AddLiquidityParams, CallContext, PoolSnapshot, PoolState, RemoveLiquidityParams, SwapParams,
};

/// A two-asset constant-product pool over a [`Ledger`].
///
/// Every mutating operation runs the same pipeline:
///
/// 1. deadline
/// 2. caller (never the custody account)
/// 3. token identities
/// 4. amounts, pricing and slippage bounds
/// 5. staged changes and their invariants
/// 6. apply the staged changes
/// 7. ledger movements, reversed together with the state if any fails
///
/// Mutating operations take `&mut self`, so no other call can observe or
/// re-enter the pool while ledger movements are in flight.
///
/// # Examples
///
/// ```
/// use simple_swap::config::PoolConfig;
/// use simple_swap::domain::{Address, Amount, Deadline, FeeTier, Timestamp};
/// use simple_swap::pool::{AddLiquidityParams, CallContext, Pool};
/// use simple_swap::traits::{Ledger, MemoryLedger};
///
/// let (a, b) = (Address::from_bytes([1; 32]), Address::from_bytes([2; 32]));
/// let custody = Address::from_bytes([3; 32]);
/// let alice = Address::from_bytes([4; 32]);
///
/// let mut ledger = MemoryLedger::new();
/// for token in [a, b] {
///     ledger.mint(token, alice, Amount::new(1_000)).expect("mint");
///     ledger.approve(token, alice, custody, Amount::MAX).expect("approve");
/// }
///
/// let config = PoolConfig::new(a, b, custody, FeeTier::ZERO).expect("valid config");
/// let mut pool = Pool::new(config, ledger).expect("valid pool");
/// let ctx = CallContext::new(alice, Timestamp::from_secs(0));
/// let receipt = pool
///     .add_liquidity(&ctx, AddLiquidityParams {
///         token_a: a,
///         token_b: b,
///         amount_a_desired: Amount::new(400),
///         amount_b_desired: Amount::new(100),
///         amount_a_min: Amount::ZERO,
///         amount_b_min: Amount::ZERO,
///         recipient: alice,
///         deadline: Deadline::NEVER,
///     })
///     .expect("deposit");
/// assert_eq!(receipt.shares_minted.get(), 200);
/// assert_eq!(pool.reserve_a(), Amount::new(400));
/// ```
#[derive(Debug, Clone)]
pub struct Pool<L> {
    config: PoolConfig,
    state: PoolState,
    ledger: L,
}

impl<L: Ledger> Pool<L> {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`] failures.
    pub fn new(config: PoolConfig, ledger: L) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: PoolState::new(),
            ledger,
        })
    }

    // -- liquidity ----------------------------------------------------------

    /// Deposits both assets and mints shares to `params.recipient`.
    ///
    /// The receipt reports amounts in the order the caller named the tokens.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Expired`] past the deadline.
    /// - [`SwapError::InvalidCaller`] if the caller is the custody account.
    /// - [`SwapError::InvalidToken`] for a null identity or one outside the
    ///   pair.
    /// - [`SwapError::InvalidAmount`] for zero desired amounts or a deposit
    ///   too small to mint a share.
    /// - [`SwapError::SlippageExceeded`] if the ratio-adjusted amounts fall
    ///   below the minimums.
    /// - [`SwapError::Ledger`] if either pull fails; nothing is changed.
    pub fn add_liquidity(
        &mut self,
        ctx: &CallContext,
        params: AddLiquidityParams,
    ) -> Result<AddLiquidityReceipt> {
        params.deadline.check(ctx.now())?;
        self.check_caller(ctx)?;
        let pair = self.pair();
        pair.require(params.token_a, params.token_b)?;
        let flipped = params.token_a != pair.token_a();
        let orient = |a: Amount, b: Amount| if flipped { (b, a) } else { (a, b) };

        let (desired_a, desired_b) = orient(params.amount_a_desired, params.amount_b_desired);
        let (min_a, min_b) = orient(params.amount_a_min, params.amount_b_min);
        let plan = plan_deposit(&self.state, desired_a, desired_b, min_a, min_b)?;

        let staged = self.state.stage_deposit(
            params.recipient,
            plan.amount_a,
            plan.amount_b,
            plan.shares,
        )?;
        staged.check_invariants()?;

        let custody = self.custody();
        let previous = self.state.apply(staged);
        self.settle(
            previous,
            &[
                Movement::Pull {
                    token: pair.token_a(),
                    owner: ctx.caller(),
                    custody,
                    amount: plan.amount_a,
                },
                Movement::Pull {
                    token: pair.token_b(),
                    owner: ctx.caller(),
                    custody,
                    amount: plan.amount_b,
                },
            ],
        )?;

        debug!(
            provider = %ctx.caller(),
            recipient = %params.recipient,
            amount_a = %plan.amount_a,
            amount_b = %plan.amount_b,
            shares = %plan.shares,
            "liquidity added"
        );
        let (amount_a, amount_b) = orient(plan.amount_a, plan.amount_b);
        Ok(AddLiquidityReceipt {
            amount_a,
            amount_b,
            shares_minted: plan.shares,
        })
    }

    /// Burns the caller's shares and pays both assets to `params.recipient`.
    ///
    /// The receipt reports amounts in the order the caller named the tokens.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Expired`] past the deadline.
    /// - [`SwapError::InvalidCaller`] if the caller is the custody account.
    /// - [`SwapError::InvalidToken`] for a null identity or one outside the
    ///   pair.
    /// - [`SwapError::InvalidAmount`] for zero shares or a burn that pays
    ///   nothing.
    /// - [`SwapError::InsufficientLiquidity`] if the caller holds fewer
    ///   shares than requested.
    /// - [`SwapError::SlippageExceeded`] if a payout falls below its minimum.
    /// - [`SwapError::Ledger`] if a payout fails; nothing is changed.
    pub fn remove_liquidity(
        &mut self,
        ctx: &CallContext,
        params: RemoveLiquidityParams,
    ) -> Result<RemoveLiquidityReceipt> {
        params.deadline.check(ctx.now())?;
        self.check_caller(ctx)?;
        let pair = self.pair();
        pair.require(params.token_a, params.token_b)?;
        let flipped = params.token_a != pair.token_a();
        let orient = |a: Amount, b: Amount| if flipped { (b, a) } else { (a, b) };

        let (min_a, min_b) = orient(params.amount_a_min, params.amount_b_min);
        let plan = plan_withdrawal(&self.state, ctx.caller(), params.liquidity, min_a, min_b)?;

        let staged = self.state.stage_withdrawal(
            ctx.caller(),
            params.liquidity,
            plan.amount_a,
            plan.amount_b,
        )?;
        staged.check_invariants()?;

        let custody = self.custody();
        let previous = self.state.apply(staged);
        self.settle(
            previous,
            &[
                Movement::Pay {
                    token: pair.token_a(),
                    custody,
                    to: params.recipient,
                    amount: plan.amount_a,
                },
                Movement::Pay {
                    token: pair.token_b(),
                    custody,
                    to: params.recipient,
                    amount: plan.amount_b,
                },
            ],
        )?;

        debug!(
            provider = %ctx.caller(),
            recipient = %params.recipient,
            shares = %params.liquidity,
            amount_a = %plan.amount_a,
            amount_b = %plan.amount_b,
            "liquidity removed"
        );
        let (amount_a, amount_b) = orient(plan.amount_a, plan.amount_b);
        Ok(RemoveLiquidityReceipt { amount_a, amount_b })
    }

    // -- swaps --------------------------------------------------------------

    /// Sells exactly `params.amount_in` of `path.token_in` for as much
    /// `path.token_out` as the curve gives.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Expired`] past the deadline.
    /// - [`SwapError::InvalidCaller`] if the caller is the custody account.
    /// - [`SwapError::InvalidPair`] if the path does not name the pair,
    ///   including a null identity.
    /// - [`SwapError::InvalidAmount`] for a zero input, an empty pool, or an
    ///   output that rounds to zero.
    /// - [`SwapError::SlippageExceeded`] if the output is below
    ///   `amount_out_min`.
    /// - [`SwapError::InvariantViolation`] if the trade would shrink `k`.
    /// - [`SwapError::Ledger`] if the pull or the payout fails; nothing is
    ///   changed.
    pub fn swap_exact_tokens_for_tokens(
        &mut self,
        ctx: &CallContext,
        params: SwapParams,
    ) -> Result<SwapReceipt> {
        params.deadline.check(ctx.now())?;
        self.check_caller(ctx)?;
        let token_in = params.path.token_in();
        let token_out = params.path.token_out();
        let direction = self.pair().direction(token_in, token_out)?;

        let (reserve_in, reserve_out) = self.state.reserves_for(direction);
        let quote = quote_exact_in(params.amount_in, reserve_in, reserve_out, self.fee_tier())?;
        if quote.amount_out.is_zero() {
            return Err(SwapError::InvalidAmount("output amount rounds to zero"));
        }
        if quote.amount_out < params.amount_out_min {
            return Err(SwapError::SlippageExceeded {
                amount: quote.amount_out,
                minimum: params.amount_out_min,
            });
        }

        let staged = self.state.stage_swap(direction, params.amount_in, quote.amount_out)?;
        let k_before = product(self.state.reserve_a().get(), self.state.reserve_b().get());
        let k_after = product(staged.reserve_a().get(), staged.reserve_b().get());
        if k_after < k_before {
            return Err(SwapError::InvariantViolation("constant product decreased"));
        }
        staged.check_invariants()?;

        let custody = self.custody();
        let previous = self.state.apply(staged);
        self.settle(
            previous,
            &[
                Movement::Pull {
                    token: token_in,
                    owner: ctx.caller(),
                    custody,
                    amount: params.amount_in,
                },
                Movement::Pay {
                    token: token_out,
                    custody,
                    to: params.recipient,
                    amount: quote.amount_out,
                },
            ],
        )?;

        debug!(
            trader = %ctx.caller(),
            recipient = %params.recipient,
            direction = %direction,
            amount_in = %params.amount_in,
            amount_out = %quote.amount_out,
            fee = %quote.fee,
            "swap executed"
        );
        Ok(SwapReceipt {
            token_in,
            token_out,
            amount_in: params.amount_in,
            amount_out: quote.amount_out,
            fee: quote.fee,
        })
    }

    /// Applies `movements` through the ledger.  On the first failure the
    /// applied movements are reversed and `previous` is re-applied.
    fn settle(&mut self, previous: Staged, movements: &[Movement]) -> Result<()> {
        let mut journal = Journal::new(&mut self.ledger);
        for movement in movements {
            if let Err(err) = journal.apply(*movement) {
                journal.rollback();
                self.state.apply(previous);
                warn!(%err, ?movement, "ledger movement failed; pool state rolled back");
                return Err(err.into());
            }
        }
        Ok(())
    }

    /// Rejects the custody account as caller: its pulls would move nothing
    /// on the ledger while still crediting the reserves.
    fn check_caller(&self, ctx: &CallContext) -> Result<()> {
        if ctx.caller() == self.custody() {
            return Err(SwapError::InvalidCaller("custody account cannot call its own pool"));
        }
        Ok(())
    }
}

impl<L> Pool<L> {
    // -- queries ------------------------------------------------------------

    /// Output for `amount_in` against the given reserves at this pool's fee.
    ///
    /// # Errors
    ///
    /// See [`get_amount_out_with_fee`](super::get_amount_out_with_fee).
    pub fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        get_amount_out_with_fee(amount_in, reserve_in, reserve_out, self.fee_tier())
    }

    /// Spot price of `token_in` in units of `token_out`, scaled by 10^18.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidPair`] if the tokens do not name the pair,
    ///   including a null identity.
    /// - [`SwapError::InvalidAmount`] while the pool is empty.
    pub fn get_price(&self, token_in: Address, token_out: Address) -> Result<Price> {
        spot_price(&self.state, self.config.token_pair(), token_in, token_out)
    }

    /// Reserve of token A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.state.reserve_a()
    }

    /// Reserve of token B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.state.reserve_b()
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.state.total_liquidity()
    }

    /// Shares held by `provider`.
    #[must_use]
    pub fn liquidity_of(&self, provider: Address) -> Liquidity {
        self.state.liquidity_of(provider)
    }

    /// First asset.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.config.token_pair().token_a()
    }

    /// Second asset.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.config.token_pair().token_b()
    }

    /// Ledger account holding the reserves.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.config.custody()
    }

    /// Trading fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.config.fee_tier()
    }

    /// Pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Current bookkeeping.
    #[must_use]
    pub const fn state(&self) -> &PoolState {
        &self.state
    }

    /// `true` while the pool holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Point-in-time view for polling front-ends.
    ///
    /// Prices are `None` only while the pool is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if a funded pool's price does not fit
    /// the 18-decimal fixed-point range.
    pub fn snapshot(&self) -> Result<PoolSnapshot> {
        let (price_a_to_b, price_b_to_a) = if self.is_empty() {
            (None, None)
        } else {
            (
                Some(self.get_price(self.token_a(), self.token_b())?),
                Some(self.get_price(self.token_b(), self.token_a())?),
            )
        };
        Ok(PoolSnapshot {
            token_a: self.token_a(),
            token_b: self.token_b(),
            reserve_a: self.reserve_a(),
            reserve_b: self.reserve_b(),
            total_liquidity: self.total_liquidity(),
            fee_tier: self.fee_tier(),
            price_a_to_b,
            price_b_to_a,
        })
    }

    /// The backing ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable access to the backing ledger, e.g. for minting or approvals
    /// between operations.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Consumes the pool and returns its ledger.
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    const fn pair(&self) -> TokenPair {
        *self.config.token_pair()
    }
}
