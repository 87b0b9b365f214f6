use crate::constants::{MAX_AMOUNT, TRANSACTION_ADDED, TRANSACTION_REMOVED};
use crate::core::errors::SplitSmartError;
use crate::core::models::transaction::{Contribution, NewTransaction};
use crate::core::services::normalize_amount;
use crate::tests::{create_test_service, expense};

#[tokio::test]
async fn test_add_transaction() {
    let service = create_test_service();
    service.add_participant("Alice").await.unwrap();
    service.add_participant("Bob").await.unwrap();

    let mut new_tx = expense(&[("Alice", 100), ("Bob", 20)], &["Alice", "Bob"]);
    new_tx.note = Some("  Dinner ".to_string());
    let tx = service.add_transaction(new_tx).await.unwrap();

    assert!(!tx.id.is_empty());
    assert_eq!(tx.note.as_deref(), Some("Dinner"));
    assert_eq!(tx.total_paid(), 120);
    assert_eq!(service.get_transaction(&tx.id).await.unwrap(), tx);

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.last().unwrap().action, TRANSACTION_ADDED);
    assert_eq!(logs.last().unwrap().details["total_paid"], 120);
}

#[tokio::test]
async fn test_add_transaction_requires_participants() {
    let service = create_test_service();
    let result = service.add_transaction(expense(&[("Alice", 10)], &["Bob"])).await;
    assert_eq!(result, Err(SplitSmartError::NoParticipants));
}

#[tokio::test]
async fn test_add_transaction_validation() {
    let service = create_test_service();
    service.add_participant("Alice").await.unwrap();
    service.add_participant("Bob").await.unwrap();

    assert_eq!(
        service.add_transaction(expense(&[], &["Bob"])).await,
        Err(SplitSmartError::NoContributors)
    );
    assert_eq!(
        service.add_transaction(expense(&[("Alice", 10)], &[])).await,
        Err(SplitSmartError::NoBeneficiaries)
    );
    assert_eq!(
        service.add_transaction(expense(&[("Carol", 10)], &["Bob"])).await,
        Err(SplitSmartError::UnknownParticipant("Carol".to_string()))
    );
    assert_eq!(
        service.add_transaction(expense(&[("Alice", 10)], &["Bob", "Dave"])).await,
        Err(SplitSmartError::UnknownParticipant("Dave".to_string()))
    );
    assert!(matches!(
        service.add_transaction(expense(&[("Alice", 10)], &["Bob", "Bob"])).await,
        Err(SplitSmartError::InvalidInput(field, _)) if field == "beneficiaries"
    ));
    assert!(matches!(
        service.add_transaction(expense(&[("", 10)], &["Bob"])).await,
        Err(SplitSmartError::InvalidInput(field, _)) if field == "payer"
    ));

    assert!(service.list_transactions().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_transaction_rejects_oversized_amount() {
    let service = create_test_service();
    service.add_participant("Alice").await.unwrap();
    service.add_participant("Bob").await.unwrap();

    for amount in [MAX_AMOUNT + 1, u64::MAX] {
        assert!(matches!(
            service.add_transaction(expense(&[("Alice", amount)], &["Bob"])).await,
            Err(SplitSmartError::InvalidInput(field, _)) if field == "amount"
        ));
    }
    assert!(service.list_transactions().await.unwrap().is_empty());
    assert!(!service.get_results().await.unwrap().has_data);

    // The cap itself is accepted and settles normally.
    service
        .add_transaction(expense(&[("Alice", MAX_AMOUNT)], &["Bob"]))
        .await
        .unwrap();
    let balances = service.get_net_balances().await.unwrap();
    assert_eq!(balances[0].balance, MAX_AMOUNT as i64);
    assert_eq!(balances[1].balance, -(MAX_AMOUNT as i64));
}

#[tokio::test]
async fn test_saved_transaction_is_a_copy() {
    let service = create_test_service();
    service.add_participant("Alice").await.unwrap();
    service.add_participant("Bob").await.unwrap();

    let mut form = NewTransaction {
        contributors: vec![Contribution::new("Alice", 40)],
        beneficiaries: vec!["Bob".to_string()],
        note: None,
    };
    let tx = service.add_transaction(form.clone()).await.unwrap();

    form.contributors[0].amount = 999;
    form.beneficiaries.push("Alice".to_string());

    let stored = service.get_transaction(&tx.id).await.unwrap();
    assert_eq!(stored.contributors, vec![Contribution::new("Alice", 40)]);
    assert_eq!(stored.beneficiaries, vec!["Bob".to_string()]);
}

#[tokio::test]
async fn test_remove_transaction() {
    let service = create_test_service();
    service.add_participant("Alice").await.unwrap();
    service.add_participant("Bob").await.unwrap();
    let tx = service.add_transaction(expense(&[("Alice", 50)], &["Bob"])).await.unwrap();
    assert_eq!(service.get_results().await.unwrap().detailed.len(), 1);

    let removed = service.remove_transaction(&tx.id).await.unwrap();
    assert_eq!(removed.id, tx.id);
    assert!(service.get_results().await.unwrap().is_empty());

    assert_eq!(
        service.remove_transaction(&tx.id).await,
        Err(SplitSmartError::TransactionNotFound(tx.id.clone()))
    );
    assert_eq!(
        service.get_app_logs().await.unwrap().last().unwrap().action,
        TRANSACTION_REMOVED
    );
}

#[test]
fn test_normalize_amount() {
    assert_eq!(normalize_amount("amount", 0.0), Ok(0));
    assert_eq!(normalize_amount("amount", 12.4), Ok(12));
    assert_eq!(normalize_amount("amount", 12.5), Ok(13));
    assert!(normalize_amount("amount", -1.0).is_err());
    assert!(normalize_amount("amount", f64::NAN).is_err());
    assert!(normalize_amount("amount", f64::INFINITY).is_err());
    assert!(normalize_amount("amount", 1e12).is_err());
}
