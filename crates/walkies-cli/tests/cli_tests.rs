use assert_cmd::Command;
use predicates::prelude::*;

/// Command pinned to the demo data's reference date, without colors.
fn walkies_cmd() -> Command {
    let mut cmd = Command::cargo_bin("walkies").expect("Failed to find walkies binary");
    cmd.args(["--no-color", "--today", "2025-09-17"]);
    cmd
}

#[test]
fn test_cli_home_screen() {
    walkies_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Hi, Alex!"))
        .stdout(predicate::str::contains("## In progress: with Jordan Lee"))
        .stdout(predicate::str::contains("- Walks this week: 1"))
        .stdout(predicate::str::contains("- Minutes booked: 120 (★ 4.8 walker)"))
        .stdout(predicate::str::contains("- Unread messages: 1"));
}

#[test]
fn test_cli_list_dogs() {
    walkies_cmd()
        .args(["dog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. 🐶 Buddy"))
        .stdout(predicate::str::contains("- Breed: Poodle, 7 yrs"))
        .stdout(predicate::str::contains("# 3. 🐕 Max"));
}

#[test]
fn test_cli_add_dog_gets_next_id() {
    walkies_cmd()
        .args(["dog", "add", "Rex", "--breed", "Beagle", "--age", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created dog with ID: 100"))
        .stdout(predicate::str::contains("# 100. 🐶 Rex"))
        .stdout(predicate::str::contains("- Breed: Beagle, 3 yrs"));
}

#[test]
fn test_cli_update_dog_lists_changes() {
    walkies_cmd()
        .args(["dog", "update", "2", "--likes", "Long naps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated dog with ID: 2"))
        .stdout(predicate::str::contains("- Likes: Long naps"));
}

#[test]
fn test_cli_delete_unknown_dog_fails() {
    walkies_cmd()
        .args(["dog", "delete", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Dog with ID 42 not found"));
}

#[test]
fn test_cli_walker_favorites_filter() {
    walkies_cmd()
        .args(["walker", "list", "--filter", "favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Alex Ray (ID: 1) ★"))
        .stdout(predicate::str::contains("## Casey Smith (ID: 3) ★"))
        .stdout(predicate::str::contains("Jordan Lee").not());
}

#[test]
fn test_cli_toggle_walker_favorite() {
    walkies_cmd()
        .args(["walker", "favorite", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Added to favorites (walker 2)"));
}

#[test]
fn test_cli_completed_walks() {
    walkies_cmd()
        .args(["walk", "list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Thu, Sep 11 with Jordan L. (✓ Completed)"))
        .stdout(predicate::str::contains("> Max loved the long run by the lake!"))
        .stdout(predicate::str::contains("In Progress").not());
}

#[test]
fn test_cli_plan_next_dates() {
    walkies_cmd()
        .args(["plan", "next", "1", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Fri, Sep 19 at 9:00 AM\n- Mon, Sep 22 at 9:00 AM\n- Wed, Sep 24 at 9:00 AM\n",
        ));
}

#[test]
fn test_cli_plan_list() {
    walkies_cmd()
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Buddy Morning Crew (ID: 1)"))
        .stdout(predicate::str::contains("- **Schedule**: Mon, Wed, Fri at 9:00 AM, 30 min"))
        .stdout(predicate::str::contains("- **Walker**: Alex Ray"))
        .stdout(predicate::str::contains("Next walks:"));
}

#[test]
fn test_cli_plan_confirm_books_walk() {
    walkies_cmd()
        .args(["plan", "confirm", "1", "2025-09-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created walk with ID: 100"))
        .stdout(predicate::str::contains("### 100. Fri, Sep 19 at 9:00 AM with Alex R. (○ Upcoming)"))
        .stdout(predicate::str::contains("- Source: Recurring Plan"))
        .stdout(predicate::str::contains("- Price: $25.00"));
}

#[test]
fn test_cli_confirm_unknown_plan_fails() {
    walkies_cmd()
        .args(["plan", "confirm", "7", "2025-09-19"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recurring plan with ID 7 not found"));
}

#[test]
fn test_cli_create_plan_requires_days() {
    walkies_cmd()
        .args(["plan", "create", "--dogs", "1", "--walker", "1", "--address", "1 Elm St"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Notice: Select at least one day of the week."));
}

#[test]
fn test_cli_update_plan_keeps_schedule_complete() {
    walkies_cmd()
        .args(["plan", "update", "1", "--days", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Notice: Select at least one day of the week."));

    walkies_cmd()
        .args(["plan", "update", "1", "--days", "2,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated recurring plan with ID: 1"))
        .stdout(predicate::str::contains("Tue, Thu at 9:00 AM, 30 min"));
}

#[test]
fn test_cli_create_plan() {
    walkies_cmd()
        .args([
            "plan", "create", "--days", "2,4,9", "--dogs", "3", "--walker", "3", "--address",
            "1 Elm St", "--time", "17:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created recurring plan with ID: 100"))
        .stdout(predicate::str::contains("## Max (ID: 100)"))
        .stdout(predicate::str::contains("Tue, Thu at 5:30 PM, 30 min"));
}

#[test]
fn test_cli_book_walk() {
    walkies_cmd()
        .args([
            "book", "--address", "123 Main St", "--dogs", "1,2", "--walker", "3", "--service", "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created walk with ID: 100"))
        .stdout(predicate::str::contains("### 100. Thu, Sep 18 at 10:00 AM with Casey S."))
        .stdout(predicate::str::contains("- Dogs: Buddy, Lucy"))
        .stdout(predicate::str::contains("- Price: $40.00"));
}

#[test]
fn test_cli_book_validation_notice() {
    walkies_cmd()
        .args(["book", "--address", "ab", "--dogs", "1", "--walker", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Notice: Add a pickup address so your walker knows where to go.",
        ));
}

#[test]
fn test_cli_book_needs_walker() {
    walkies_cmd()
        .args(["book", "--address", "123 Main St", "--dogs", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Notice: Choose a preferred walker."));
}

#[test]
fn test_cli_book_from_plan_dry_run() {
    walkies_cmd()
        .args(["book", "--plan", "1", "--on", "2025-09-22", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **When**: Mon, Sep 22 at 9:00 AM"))
        .stdout(predicate::str::contains("- **Walker**: Alex Ray"))
        .stdout(predicate::str::contains("- **Total**: $25.00"))
        .stdout(predicate::str::contains("Created").not());
}

#[test]
fn test_cli_book_rejects_past_date() {
    walkies_cmd()
        .args(["book", "--date", "2025-09-17", "--address", "123 Main St", "--dogs", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Walks can't be booked before 2025-09-18."));
}

#[test]
fn test_cli_json_output() {
    walkies_cmd()
        .args(["--json", "walker", "list", "--filter", "price"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"name\": \"Casey Smith\""));
}

#[test]
fn test_cli_profile_completion() {
    walkies_cmd()
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Alex Morgan"))
        .stdout(predicate::str::contains("Missing:"));
}

#[test]
fn test_cli_add_card_validation() {
    walkies_cmd()
        .args([
            "card", "add", "--number", "4242", "--expiry", "12/30", "--cvv", "123", "--name",
            "Alex Morgan", "--address", "1 Elm St", "--city", "Seattle", "--state", "WA", "--zip",
            "98101",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Notice: Enter a valid card number."));
}

#[test]
fn test_cli_inbox_chat() {
    walkies_cmd()
        .args(["inbox", "chat", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Chat with Casey Smith"))
        .stdout(predicate::str::contains("- **You**: He is usually very friendly!"));
}

#[test]
fn test_cli_invalid_walker_filter() {
    walkies_cmd()
        .args(["walker", "list", "--filter", "closest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid walker filter"));
}
