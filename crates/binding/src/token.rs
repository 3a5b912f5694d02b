//! Human Standard Token descriptor table.
//!
//! Function and event layouts match the deployed contract's interface; the
//! selectors derived here must agree with its dispatch table (asserted in
//! the tests below against the constants embedded in the bytecode).

use abi::{AbiError, Event, Function, ParamType, Value};
use alloy_primitives::{hex, Bytes, B256, U256};
use once_cell::sync::Lazy;

/// `name() -> string`
pub const NAME: Function = Function::new("name", &[], Some(ParamType::String));

/// `symbol() -> string`
pub const SYMBOL: Function = Function::new("symbol", &[], Some(ParamType::String));

/// `version() -> string`
pub const VERSION: Function = Function::new("version", &[], Some(ParamType::String));

/// `decimals() -> uint8`
pub const DECIMALS: Function = Function::new("decimals", &[], Some(ParamType::Uint(8)));

/// `totalSupply() -> uint256`
pub const TOTAL_SUPPLY: Function =
    Function::new("totalSupply", &[], Some(ParamType::Uint(256)));

/// `balanceOf(address owner) -> uint256`
pub const BALANCE_OF: Function =
    Function::new("balanceOf", &[ParamType::Address], Some(ParamType::Uint(256)));

/// `allowance(address owner, address spender) -> uint256`
pub const ALLOWANCE: Function = Function::new(
    "allowance",
    &[ParamType::Address, ParamType::Address],
    Some(ParamType::Uint(256)),
);

/// `approve(address spender, uint256 value)`, emits [`APPROVAL_EVENT`].
pub const APPROVE: Function = Function::new(
    "approve",
    &[ParamType::Address, ParamType::Uint(256)],
    None,
);

/// `transfer(address to, uint256 value)`, emits [`TRANSFER_EVENT`].
pub const TRANSFER: Function = Function::new(
    "transfer",
    &[ParamType::Address, ParamType::Uint(256)],
    None,
);

/// `transferFrom(address from, address to, uint256 value)`, emits
/// [`TRANSFER_EVENT`].
pub const TRANSFER_FROM: Function = Function::new(
    "transferFrom",
    &[ParamType::Address, ParamType::Address, ParamType::Uint(256)],
    None,
);

/// `approveAndCall(address spender, uint256 value, bytes extraData)`,
/// emits [`APPROVAL_EVENT`].
pub const APPROVE_AND_CALL: Function = Function::new(
    "approveAndCall",
    &[ParamType::Address, ParamType::Uint(256), ParamType::Bytes],
    None,
);

/// Every callable function of the interface.
pub const FUNCTIONS: &[&Function] = &[
    &NAME,
    &SYMBOL,
    &VERSION,
    &DECIMALS,
    &TOTAL_SUPPLY,
    &BALANCE_OF,
    &ALLOWANCE,
    &APPROVE,
    &TRANSFER,
    &TRANSFER_FROM,
    &APPROVE_AND_CALL,
];

/// Look up a function descriptor by its exported name.
pub fn function(name: &str) -> Option<&'static Function> {
    FUNCTIONS.iter().copied().find(|f| f.name == name)
}

/// `Transfer(address indexed from, address indexed to, uint256 value)`
pub const TRANSFER_EVENT: Event = Event::new(
    "Transfer",
    &[ParamType::Address, ParamType::Address],
    &[ParamType::Uint(256)],
);

/// `Approval(address indexed owner, address indexed spender, uint256 value)`
pub const APPROVAL_EVENT: Event = Event::new(
    "Approval",
    &[ParamType::Address, ParamType::Address],
    &[ParamType::Uint(256)],
);

/// Cached signature hash of [`TRANSFER_EVENT`].
pub static TRANSFER_TOPIC: Lazy<B256> = Lazy::new(|| TRANSFER_EVENT.topic());

/// Cached signature hash of [`APPROVAL_EVENT`].
pub static APPROVAL_TOPIC: Lazy<B256> = Lazy::new(|| APPROVAL_EVENT.topic());

/// Constructor layout:
/// `(uint256 initialAmount, string tokenName, uint8 decimalUnits, string tokenSymbol)`
pub const CONSTRUCTOR: &[ParamType] = &[
    ParamType::Uint(256),
    ParamType::String,
    ParamType::Uint(8),
    ParamType::String,
];

/// Deploy payload: compiled bytecode followed by the encoded constructor
/// arguments.
pub fn encode_deploy(
    initial_amount: U256,
    token_name: &str,
    decimal_units: u64,
    token_symbol: &str,
) -> Result<Bytes, AbiError> {
    let args = [
        Value::uint256(initial_amount),
        Value::String(token_name.to_owned()),
        Value::Uint(U256::from(decimal_units), 8),
        Value::String(token_symbol.to_owned()),
    ];
    debug_assert!(args.iter().map(Value::kind).eq(CONSTRUCTOR.iter().copied()));
    let encoded = abi::encode_args(&args)?;
    let mut data = Vec::with_capacity(DEPLOYMENT_BYTECODE.len() + encoded.len());
    data.extend_from_slice(DEPLOYMENT_BYTECODE);
    data.extend_from_slice(&encoded);
    Ok(data.into())
}

/// Compiled Human Standard Token contract.
pub const DEPLOYMENT_BYTECODE: &[u8] = &hex!(
    "60c0604052600460808190527f48302e31000000000000000000000000000000"
    "0000000000000000000000000060a090815261003e916006919061016b565b50"
    "34801561004b57600080fd5b50604051610a4f380380610a4f83398101806040"
    "52608081101561006e57600080fd5b8151602083018051919392830192916401"
    "0000000081111561008f57600080fd5b820160208101848111156100a2576000"
    "80fd5b81516401000000008111828201871017156100bc57600080fd5b505060"
    "208201516040909201805191949293916401000000008111156100e157600080"
    "fd5b820160208101848111156100f457600080fd5b8151640100000000811182"
    "82018710171561010e57600080fd5b5050336000908152600160209081526040"
    "822089905590889055865191945061013e93506003925086019061016b565b50"
    "6004805460ff191660ff8416179055805161016190600590602084019061016b"
    "565b5050505050610206565b8280546001816001161561010002031660029004"
    "90600052602060002090601f016020900481019282601f106101ac57805160ff"
    "19168380011785556101d9565b828001600101855582156101d9579182015b82"
    "8111156101d95782518255916020019190600101906101be565b506101e59291"
    "506101e9565b5090565b61020391905b808211156101e5576000815560010161"
    "01ef565b90565b61083a806102156000396000f3fe6080604052348015610010"
    "57600080fd5b50600436106100c6576000357c01000000000000000000000000"
    "000000000000000000000000000000009004806354fd4d501161008e57806354"
    "fd4d50146101f657806370a08231146101fe57806395d89b4114610224578063"
    "a9059cbb1461022c578063cae9ca5114610258578063dd62ed3e146102dd5761"
    "00c6565b806306fdde03146100cb578063095ea7b31461014857806318160ddd"
    "1461018857806323b872dd146101a2578063313ce567146101d8575b600080fd"
    "5b6100d361030b565b6040805160208082528351818301528351919283929083"
    "019185019080838360005b8381101561010d5781810151838201526020016100"
    "f5565b50505050905090810190601f16801561013a5780820380516001836020"
    "036101000a031916815260200191505b509250505060405180910390f35b6101"
    "746004803603604081101561015e57600080fd5b50600160a060020a03813516"
    "9060200135610399565b604080519115158252519081900360200190f35b6101"
    "90610400565b60408051918252519081900360200190f35b6101746004803603"
    "60608110156101b857600080fd5b50600160a060020a03813581169160208101"
    "359091169060400135610406565b6101e06104f3565b6040805160ff90921682"
    "52519081900360200190f35b6100d36104fc565b610190600480360360208110"
    "1561021457600080fd5b5035600160a060020a0316610557565b6100d3610572"
    "565b6101746004803603604081101561024257600080fd5b50600160a060020a"
    "0381351690602001356105cd565b6101746004803603606081101561026e5760"
    "0080fd5b600160a060020a038235169160208101359181019060608101604082"
    "013564010000000081111561029e57600080fd5b8201836020820111156102b0"
    "57600080fd5b8035906020019184600183028401116401000000008311171561"
    "02d257600080fd5b509092509050610666565b61019060048036036040811015"
    "6102f357600080fd5b50600160a060020a03813581169160200135166107b556"
    "5b60038054604080516020600260018516156101000260001901909416939093"
    "04601f8101849004840282018401909252818152929183018282801561039157"
    "80601f1061036657610100808354040283529160200191610391565b82019190"
    "6000526020600020905b81548152906001019060200180831161037457829003"
    "601f168201915b505050505081565b3360008181526002602090815260408083"
    "20600160a060020a038716808552908352818420869055815186815291519394"
    "909390927f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200a"
    "c8c7c3b925928290030190a35060015b92915050565b60005481565b600160a0"
    "60020a0383166000908152600160205260408120548211801590610451575060"
    "0160a060020a0384166000908152600260209081526040808320338452909152"
    "9020548211155b801561045d5750600082115b156104e857600160a060020a03"
    "8084166000818152600160209081526040808320805488019055938816808352"
    "8483208054889003905560028252848320338452825291849020805487900390"
    "5583518681529351929391927fddf252ad1be2c89b69c2b068fc378daa952ba7"
    "f163c4a11628f55a4df523b3ef9281900390910190a35060016104ec565b5060"
    "005b9392505050565b60045460ff1681565b6006805460408051602060026001"
    "851615610100026000190190941693909304601f810184900484028201840190"
    "925281815292918301828280156103915780601f106103665761010080835404"
    "0283529160200191610391565b600160a060020a031660009081526001602052"
    "604090205490565b600580546040805160206002600185161561010002600019"
    "0190941693909304601f81018490048402820184019092528181529291830182"
    "8280156103915780601f10610366576101008083540402835291602001916103"
    "91565b3360009081526001602052604081205482118015906105ec5750600082"
    "115b1561065e5733600081815260016020908152604080832080548790039055"
    "600160a060020a03871680845292819020805487019055805186815290519293"
    "927fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523"
    "b3ef929181900390910190a35060016103fa565b5060006103fa565b33600081"
    "8152600260209081526040808320600160a060020a0389168085529083528184"
    "20889055815188815291519394909390927f8c5be1e5ebec7d5bd14f71427d1e"
    "84f3dd0314c0f7b2291e5b200ac8c7c3b925928290030190a3600085600160a0"
    "60020a031660405160200180806020018281038252602e8152602001806107e1"
    "602e913960400191505060405160208183030381529060405260405180828051"
    "90602001908083835b602083106107325780518252601f199092019160209182"
    "019101610713565b6001836020036101000a0380198251168184511680821785"
    "525050505050509050019150506000604051808303816000865af19150503d80"
    "60008114610794576040519150601f19603f3d011682016040523d82523d6000"
    "602084013e610799565b606091505b505090508015156107a957600080fd5b50"
    "600195945050505050565b600160a060020a0391821660009081526002602090"
    "815260408083209390941682529190915220549056fe72656365697665417070"
    "726f76616c28616464726573732c75696e743235362c616464726573732c6279"
    "74657329a165627a7a72305820d15a070a95051e159632a5f42da17cdc0b4e94"
    "0c8c7574a86370e2f434405abd0029"
);
