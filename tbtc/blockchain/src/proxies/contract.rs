use std::{
	fmt,
	marker::PhantomData,
	sync::Arc,
};

use async_trait::async_trait;
use ethabi::Token;
use futures::{
	stream::BoxStream,
	StreamExt,
};
use tbtc_primitives::types::{
	Address,
	BlockId,
	BlockNumber,
	Bytes,
	U256,
};
use tracing::{
	debug,
	info,
	warn,
};
use web3::{
	contract::tokens::Tokenizable,
	types::CallRequest,
};

use super::{
	common::{
		Account,
		Result,
		SubmittedTransaction,
	},
	manager::ChainContext,
	ProxyError,
	TransactionOptions,
};
use crate::{
	blocks::BlockCounter,
	client::{
		ChainClient,
		Subscriber,
	},
	contracts::ContractIdentifier,
	events::{
		event_filter,
		ContractEvent,
		Event,
		EventError,
		EventSource,
		EventSubscription,
		IndexedFilters,
		SubscribeOptions,
	},
	mining::MiningWaiter,
	resolver::{
		ErrorResolver,
		ResolvedError,
	},
};

/// Everything needed to talk to one deployed contract.
pub struct ContractHandle<C: ChainClient> {
	id: ContractIdentifier,
	address: Address,
	abi: Arc<ethabi::Contract>,
	client: Arc<C>,
	account: Account<C>,
	/// Options every submission starts from.
	defaults: TransactionOptions,
	resolver: Arc<ErrorResolver<C>>,
	mining_waiter: MiningWaiter<C>,
	block_counter: BlockCounter<C>,
	subscriber: Option<Arc<dyn Subscriber>>,
}

impl<C: ChainClient> Clone for ContractHandle<C> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			address: self.address,
			abi: self.abi.clone(),
			client: self.client.clone(),
			account: self.account.clone(),
			defaults: self.defaults.clone(),
			resolver: self.resolver.clone(),
			mining_waiter: self.mining_waiter.clone(),
			block_counter: self.block_counter.clone(),
			subscriber: self.subscriber.clone(),
		}
	}
}

impl<C: ChainClient> ContractHandle<C> {
	pub fn new(
		id: ContractIdentifier,
		address: Address,
		abi: ethabi::Contract,
		context: &ChainContext<C>,
	) -> Self {
		let resolver =
			Arc::new(ErrorResolver::new(context.client.clone(), abi.clone(), address));
		Self {
			id,
			address,
			abi: Arc::new(abi),
			client: context.client.clone(),
			account: context.account.clone(),
			defaults: TransactionOptions::default(),
			resolver,
			mining_waiter: context.mining_waiter.clone(),
			block_counter: context.block_counter.clone(),
			subscriber: context.subscriber.clone(),
		}
	}

	pub fn id(&self) -> ContractIdentifier {
		self.id
	}

	pub fn address(&self) -> Address {
		self.address
	}

	/// Address used as `from` for calls and submissions.
	pub fn from_address(&self) -> Address {
		self.account.address()
	}

	fn encode(&self, method: &str, params: &[Token]) -> Result<Bytes> {
		let data = self.abi.function(method)?.encode_input(params)?;
		Ok(data.into())
	}

	async fn resolve<E: fmt::Display>(
		&self,
		error: E,
		value: Option<U256>,
		method: &str,
		params: &[Token],
	) -> ResolvedError {
		self.resolver
			.resolve_error(error, self.account.address(), value, method, params)
			.await
	}

	/// Submits a transaction calling `method` and keeps it moving until it is mined.
	pub async fn submit(
		&self,
		method: &'static str,
		params: Vec<Token>,
		options: Option<TransactionOptions>,
	) -> Result<SubmittedTransaction> {
		debug!(
			message = "Submitting transaction",
			contract = %self.id,
			method,
			params = ?params,
		);

		let _guard = self.account.lock().await;

		let options = match options {
			Some(options) => options.apply(&self.defaults),
			None => self.defaults.clone(),
		};
		let data = self.encode(method, &params)?;

		let nonce = self.account.nonce_manager().current_nonce().await?;

		let transaction =
			match self.account.send_transaction(self.address, data.clone(), nonce, &options).await {
				Ok(transaction) => transaction,
				Err(e) => return Err(self.resolve(e, options.value, method, &params).await.into()),
			};

		info!(
			message = "Submitted transaction",
			contract = %self.id,
			method,
			hash = ?transaction.hash,
			nonce = %transaction.nonce,
		);

		let handle = self.clone();
		// A gas limit set by the caller is kept, otherwise it is estimated again.
		let gas_limit = options.gas_limit;
		let value = options.value;
		self.mining_waiter.force_mining(transaction.clone(), move |resubmission| {
			let handle = handle.clone();
			let params = params.clone();
			let data = data.clone();
			let options =
				TransactionOptions { gas_limit, gas_price: Some(resubmission.gas_price), value };
			async move {
				match handle
					.account
					.send_transaction(handle.address, data, resubmission.nonce, &options)
					.await
				{
					Ok(transaction) => {
						info!(
							message = "Submitted transaction",
							contract = %handle.id,
							method,
							hash = ?transaction.hash,
							nonce = %transaction.nonce,
						);
						Ok(transaction)
					},
					Err(e) => Err(handle.resolve(e, value, method, &params).await.into()),
				}
			}
		});

		self.account.nonce_manager().increment_nonce(transaction.nonce);

		Ok(transaction)
	}

	async fn call_raw(
		&self,
		method: &str,
		params: &[Token],
		value: Option<U256>,
		block: Option<BlockNumber>,
	) -> Result<Bytes> {
		let data = self.encode(method, params)?;
		let request = CallRequest {
			from: Some(self.account.address()),
			to: Some(self.address),
			value,
			data: Some(data),
			..Default::default()
		};
		let block = block.map(|number| BlockId::Number(number.into()));

		match self.client.call(request, block).await {
			Ok(output) => Ok(output),
			Err(e) => Err(self.resolve(e, value, method, params).await.into()),
		}
	}

	/// Runs `method` as a call, checking that the transaction would succeed.
	pub async fn call_transaction(
		&self,
		method: &str,
		params: Vec<Token>,
		value: Option<U256>,
		block: Option<BlockNumber>,
	) -> Result<()> {
		self.call_raw(method, &params, value, block).await?;
		Ok(())
	}

	/// Calls `method` and decodes its outputs.
	///
	/// Several outputs are decoded as one tuple.
	pub async fn call_at_block<R: Tokenizable>(
		&self,
		method: &str,
		params: Vec<Token>,
		value: Option<U256>,
		block: Option<BlockNumber>,
	) -> Result<R> {
		let output = self.call_raw(method, &params, value, block).await?;
		let mut tokens = self.abi.function(method)?.decode_output(&output.0)?;
		let result = if tokens.len() == 1 {
			R::from_token(tokens.remove(0))?
		} else {
			R::from_token(Token::Tuple(tokens))?
		};
		Ok(result)
	}

	pub async fn estimate_gas(
		&self,
		method: &str,
		params: Vec<Token>,
		value: Option<U256>,
	) -> Result<u64> {
		let data = self.encode(method, &params)?;
		let gas = self
			.client
			.estimate_gas(CallRequest {
				from: Some(self.account.address()),
				to: Some(self.address),
				value,
				data: Some(data),
				..Default::default()
			})
			.await?;
		if gas.bits() > 64 {
			return Err(ProxyError::Unrecoverable(format!(
				"gas estimate {} of `{}` does not fit into 64 bits",
				gas, method
			)))
		}
		Ok(gas.low_u64())
	}

	fn abi_event(&self, name: &str) -> std::result::Result<&ethabi::Event, EventError> {
		self.abi.event(name).map_err(|_| EventError::UnknownEvent(name.to_owned()))
	}

	/// Fetches the `E` events emitted between the given blocks.
	pub async fn past_events<E: ContractEvent>(
		&self,
		start_block: BlockNumber,
		end_block: Option<BlockNumber>,
		indexed: IndexedFilters,
	) -> Result<Vec<E>> {
		let abi_event = self.abi_event(E::NAME)?;
		let filter =
			event_filter(self.address, abi_event.signature(), &indexed, Some(start_block), end_block);

		let logs = self.client.logs(filter).await?;
		logs.iter()
			.filter(|log| !log.is_removed())
			.map(|log| -> Result<E> { Ok(E::from_event(Event::decode(abi_event, log)?)?) })
			.collect()
	}

	/// Prepares a subscription to `E` events matching the indexed filters.
	pub fn subscribe<E: ContractEvent>(
		&self,
		opts: Option<SubscribeOptions>,
		indexed: IndexedFilters,
	) -> EventSubscription<E> {
		let source =
			ContractEventSource { handle: self.clone(), indexed, _event: PhantomData::<fn() -> E> };
		EventSubscription::new(Arc::new(source), opts)
	}
}

/// Feeds a subscription from one contract.
struct ContractEventSource<C: ChainClient, E> {
	handle: ContractHandle<C>,
	indexed: IndexedFilters,
	_event: PhantomData<fn() -> E>,
}

#[async_trait]
impl<C: ChainClient, E: ContractEvent> EventSource<E> for ContractEventSource<C, E> {
	async fn current_block(&self) -> Result<BlockNumber> {
		self.handle.block_counter.current_block().await
	}

	async fn past_events(&self, from_block: BlockNumber) -> Result<Vec<E>> {
		self.handle.past_events(from_block, None, self.indexed.clone()).await
	}

	fn can_watch(&self) -> bool {
		self.handle.subscriber.is_some()
	}

	async fn watch(&self) -> Result<BoxStream<'static, Result<E>>> {
		let subscriber = self.handle.subscriber.clone().ok_or_else(|| {
			ProxyError::Unrecoverable(format!("no subscriber available for {}", E::NAME))
		})?;
		let abi_event = self.handle.abi_event(E::NAME)?.clone();
		let filter =
			event_filter(self.handle.address, abi_event.signature(), &self.indexed, None, None);

		let logs = subscriber.subscribe_logs(filter).await?;
		let events = logs.filter_map(move |log| {
			let decoded = match log {
				Err(e) => Some(Err(ProxyError::from(e))),
				Ok(log) if log.is_removed() => None,
				Ok(log) => match Event::decode(&abi_event, &log).and_then(E::from_event) {
					Ok(event) => Some(Ok(event)),
					Err(e) => {
						warn!(message = "Could not decode event", event = E::NAME, error = %e);
						None
					},
				},
			};
			futures::future::ready(decoded)
		});
		Ok(events.boxed())
	}
}
