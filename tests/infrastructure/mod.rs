mod in_memory_repository_test;
mod pg_conversation_repository_test;
