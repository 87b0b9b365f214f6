use crate::constants::{PARTICIPANT_ADDED, PARTICIPANT_REMOVED};
use crate::core::errors::SplitSmartError;
use crate::tests::{create_test_service, expense};

#[tokio::test]
async fn test_add_participant() {
    let service = create_test_service();

    let participant = service.add_participant("  Alice ").await.unwrap();
    assert_eq!(participant.name, "Alice");

    let fetched = service.get_participant("Alice").await.unwrap();
    assert_eq!(fetched, participant);

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, PARTICIPANT_ADDED);
    assert_eq!(logs[0].details["name"], "Alice");
}

#[tokio::test]
async fn test_participants_keep_insertion_order() {
    let service = create_test_service();
    for name in ["Carol", "Alice", "Bob"] {
        service.add_participant(name).await.unwrap();
    }

    let names: Vec<String> = service
        .list_participants()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
}

#[tokio::test]
async fn test_add_duplicate_participant() {
    let service = create_test_service();
    service.add_participant("Alice").await.unwrap();

    let result = service.add_participant("Alice ").await;
    assert_eq!(result, Err(SplitSmartError::ParticipantAlreadyExists("Alice".to_string())));
    assert_eq!(service.list_participants().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_participant_invalid_name() {
    let service = create_test_service();

    assert!(matches!(
        service.add_participant("   ").await,
        Err(SplitSmartError::InvalidInput(field, _)) if field == "name"
    ));
    assert!(matches!(
        service.add_participant("<script>").await,
        Err(SplitSmartError::InvalidInput(_, _))
    ));
    assert!(matches!(
        service.add_participant(&"x".repeat(101)).await,
        Err(SplitSmartError::InvalidInput(_, _))
    ));
    assert!(service.list_participants().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_unknown_participant() {
    let service = create_test_service();
    let result = service.remove_participant("Nobody").await;
    assert_eq!(result, Err(SplitSmartError::ParticipantNotFound("Nobody".to_string())));
}

#[tokio::test]
async fn test_get_participant_trims_name() {
    let service = create_test_service();
    service.add_participant("Alice").await.unwrap();

    assert_eq!(service.get_participant("  Alice ").await.unwrap().name, "Alice");
    assert_eq!(
        service.get_participant(" Nobody ").await,
        Err(SplitSmartError::ParticipantNotFound("Nobody".to_string()))
    );
}

#[tokio::test]
async fn test_remove_participant_cascades_to_transactions() {
    let service = create_test_service();
    for name in ["A", "B", "C"] {
        service.add_participant(name).await.unwrap();
    }
    let paid_by_c = service.add_transaction(expense(&[("C", 30)], &["A", "B"])).await.unwrap();
    let c_benefits = service.add_transaction(expense(&[("A", 20)], &["B", "C"])).await.unwrap();
    let unrelated = service.add_transaction(expense(&[("A", 50)], &["B"])).await.unwrap();

    let removed = service.remove_participant("C").await.unwrap();
    assert_eq!(removed, vec![paid_by_c.id, c_benefits.id]);

    let remaining = service.list_transactions().await.unwrap();
    assert_eq!(remaining, vec![unrelated]);

    let results = service.get_results().await.unwrap();
    for transfer in results.detailed.iter().chain(&results.normal).chain(&results.advanced) {
        assert_ne!(transfer.from, "C");
        assert_ne!(transfer.to, "C");
    }
    assert_eq!(results.advanced.len(), 1);

    let logs = service.get_app_logs().await.unwrap();
    let last = logs.last().unwrap();
    assert_eq!(last.action, PARTICIPANT_REMOVED);
    assert_eq!(last.details["removed_transactions"].as_array().unwrap().len(), 2);
}
