//! Tests for the embedded catalogs.

use govapp_catalog::{
    common_transaction_categories, common_transactions, common_transactions_in,
    default_policies, default_transactions, find_common_transaction, find_policy,
    find_transaction, load_transactions, policies_in,
};
use govapp_model::{StepStatus, TransactionStatus};

#[test]
fn common_transactions_match_front_end_catalog() {
    let titles: Vec<&str> = common_transactions()
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(
        titles,
        ["身份证办理", "驾驶证办理", "结婚登记", "社保卡办理", "营业执照办理"]
    );
}

#[test]
fn id_card_guide_is_complete() {
    let guide = find_common_transaction("1").expect("id card guide");
    assert_eq!(guide.icon, "🪪");
    assert_eq!(guide.category, "户政服务");
    assert_eq!(guide.required_documents, ["户口本", "照片"]);
    assert_eq!(guide.step_count(), 6);
    assert_eq!(guide.process[0], "1. 前往就近的户政服务中心");
    assert_eq!(guide.materials.len(), 3);
    assert!(guide.has_form_field("申办类型（首次/换领/补领）"));
    assert_eq!(guide.address, "各区县户政服务中心或派出所户籍窗口");
}

#[test]
fn business_license_form_fields_in_order() {
    let guide = find_common_transaction("5").expect("business license guide");
    assert_eq!(guide.online_form_fields.len(), 8);
    assert_eq!(guide.online_form_fields.first().map(String::as_str), Some("企业名称"));
    assert_eq!(guide.online_form_fields.last().map(String::as_str), Some("联系电话"));
}

#[test]
fn categories_are_distinct_and_ordered() {
    assert_eq!(
        common_transaction_categories(),
        ["户政服务", "交通服务", "民政服务", "社保服务", "工商服务"]
    );
    assert_eq!(common_transactions_in("民政服务").len(), 1);
    assert!(common_transactions_in("不存在").is_empty());
    assert!(find_common_transaction("99").is_none());
}

#[test]
fn default_transactions_carry_steps() {
    assert_eq!(default_transactions().len(), 2);

    let id_card = find_transaction("1").expect("transaction 1");
    assert_eq!(id_card.status, TransactionStatus::Processing);
    assert_eq!(id_card.steps.len(), 3);
    assert_eq!(
        id_card.current_step().map(|s| s.id.as_str()),
        Some("1-2")
    );

    let license = find_transaction("2").expect("transaction 2");
    assert_eq!(license.status, TransactionStatus::Pending);
    assert_eq!(license.steps.len(), 4);
    assert_eq!(license.completed_steps(), 1);
    assert_eq!(license.steps[3].status, StepStatus::Pending);
    assert_eq!(license.steps[3].required_documents, ["领取凭证"]);
}

#[test]
fn policies_catalog() {
    assert_eq!(default_policies().len(), 2);
    let policy = find_policy("1").expect("policy 1");
    assert!(policy.is_new);
    assert!(policy.has_tag("新政策"));
    assert!(policy.content.contains("\n\n一、总体要求"));
    assert_eq!(policies_in("民营经济").len(), 1);
    assert!(!find_policy("2").expect("policy 2").is_new);
}

#[test]
fn load_returns_independent_copies() {
    let mut copy = load_transactions().expect("load transactions");
    copy[0].status = TransactionStatus::Completed;
    assert_eq!(default_transactions()[0].status, TransactionStatus::Processing);
}
