/// Generates, for every mutating contract method, a submitting method, a checking call and a
/// gas estimate.
macro_rules! transactions {
	($(
		$(#[$doc:meta])*
		$method:literal => $submit:ident, $call:ident, $estimate:ident ($($arg:ident: $ty:ty),* $(,)?);
	)*) => {
		$(
			$(#[$doc])*
			pub async fn $submit(
				&self,
				$($arg: $ty,)*
				options: Option<TransactionOptions>,
			) -> Result<SubmittedTransaction> {
				self.contract.submit($method, vec![$($arg.into_token()),*], options).await
			}

			#[doc = concat!("Checks that a `", $method, "` transaction would succeed at the given block.")]
			pub async fn $call(&self, $($arg: $ty,)* block: Option<BlockNumber>) -> Result<()> {
				self.contract.call_transaction($method, vec![$($arg.into_token()),*], None, block).await
			}

			#[doc = concat!("Estimates the gas a `", $method, "` transaction uses.")]
			pub async fn $estimate(&self, $($arg: $ty),*) -> Result<u64> {
				self.contract.estimate_gas($method, vec![$($arg.into_token()),*], None).await
			}
		)*
	};
}

/// Generates read-only accessors, evaluated at the given block or at the latest one.
macro_rules! views {
	($(
		$(#[$doc:meta])*
		$method:literal => $name:ident ($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty;
	)*) => {
		$(
			$(#[$doc])*
			pub async fn $name(&self, $($arg: $ty,)* block: Option<BlockNumber>) -> Result<$ret> {
				self.contract.call_at_block($method, vec![$($arg.into_token()),*], None, block).await
			}
		)*
	};
}

/// Generates past event lookups and subscriptions.
///
/// Every filter argument lists the accepted values of one indexed parameter.
macro_rules! events {
	($(
		$event:ident => $past:ident, $subscribe:ident ($($filter:ident: $fty:ty),* $(,)?);
	)*) => {
		$(
			pub async fn $past(
				&self,
				start_block: BlockNumber,
				end_block: Option<BlockNumber>,
				$($filter: Vec<$fty>,)*
			) -> Result<Vec<$event>> {
				self.contract.past_events::<$event>(start_block, end_block, vec![$(topics($filter)),*]).await
			}

			pub fn $subscribe(
				&self,
				opts: Option<SubscribeOptions>,
				$($filter: Vec<$fty>,)*
			) -> EventSubscription<$event> {
				self.contract.subscribe::<$event>(opts, vec![$(topics($filter)),*])
			}
		)*
	};
}
